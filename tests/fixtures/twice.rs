//@ --type Twice --constructors all-args

pub struct Address {
    pub street: String,
}

pub struct Twice(Address, Address);
