// Code generated by structor --type Point --constructors all-args,builder; DO NOT EDIT.

use super::*;
impl Point {
    pub fn new(name: String, age: u64, address: Address) -> Point {
        Point {
            name: name,
            age: age,
            address: address,
        }
    }
}
pub struct PointBuilder {
    name: String,
    age: u64,
    address: Address,
}
impl PointBuilder {
    pub fn new() -> PointBuilder {
        PointBuilder {
            name: Default::default(),
            age: Default::default(),
            address: Default::default(),
        }
    }
    pub fn with_name(mut self, name: String) -> PointBuilder {
        self.name = name;
        self
    }
    pub fn with_age(mut self, age: u64) -> PointBuilder {
        self.age = age;
        self
    }
    pub fn with_address(mut self, address: Address) -> PointBuilder {
        self.address = address;
        self
    }
    pub fn build(self) -> Point {
        Point {
            name: self.name,
            age: self.age,
            address: self.address,
        }
    }
}
