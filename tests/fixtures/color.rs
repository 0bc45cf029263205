//@ --type Color --constructors all-args

pub enum Color {
    Red,
    Green,
    Blue,
}
