//@ --type Point --constructors buildr

pub struct Point {
    name: String,
}
