//@ --type Ghost --constructors all-args

pub struct Present {
    here: bool,
}
