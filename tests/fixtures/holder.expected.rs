// Code generated by structor --type Holder --constructors builder; DO NOT EDIT.

use super::*;
pub struct HolderBuilder<T: Clone> {
    value: T,
}
impl<T: Clone> HolderBuilder<T> {
    pub fn new() -> HolderBuilder<T> {
        HolderBuilder {
            value: Default::default(),
        }
    }
    pub fn with_value(mut self, value: T) -> HolderBuilder<T> {
        self.value = value;
        self
    }
    pub fn build(self) -> Holder<T> {
        Holder {
            value: self.value,
            touched: Default::default(),
        }
    }
}
