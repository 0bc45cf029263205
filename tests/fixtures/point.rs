//@ --type Point --constructors all-args,builder

pub struct Address {
    pub street: String,
}

pub struct Point {
    name: String,
    age: u64,
    address: Address,
}
