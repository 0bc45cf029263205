//@ --type Session --constructors all-args,builder

pub struct Session {
    user: String,
    #[constructor(skip)]
    request_count: u64,
    active: bool,
}
