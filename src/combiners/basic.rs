//! Basic combiners: Count, Sum, Min, Max.

use crate::combiners::CombineFn;
use std::marker::PhantomData;
use std::mem::take;
use std::ops::Add;

/// Number of values per group.
#[derive(Clone, Copy, Debug, Default)]
pub struct Count;

impl<V: 'static> CombineFn<V, u64, u64> for Count {
    fn create(&self) -> u64 {
        0
    }
    fn add_input(&self, acc: &mut u64, _v: V) {
        *acc += 1;
    }
    fn merge(&self, acc: &mut u64, other: u64) {
        *acc += other;
    }
    fn finish(&self, acc: u64) -> u64 {
        acc
    }
}

/// Sum of values per group. Requires `Add + Default`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sum<T>(PhantomData<T>);

impl<T> Sum<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, T, T> for Sum<T>
where
    T: Add<Output = T> + Default + Send + Sync + 'static,
{
    fn create(&self) -> T {
        T::default()
    }
    fn add_input(&self, acc: &mut T, v: T) {
        *acc = take(acc) + v;
    }
    fn merge(&self, acc: &mut T, other: T) {
        *acc = take(acc) + other;
    }
    fn finish(&self, acc: T) -> T {
        acc
    }
}

/// Minimum value per group (requires `Ord`).
///
/// The accumulator is `Option<T>`; `finish` on a never-fed accumulator is a
/// caller bug, since groups only exist for at least one observed value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Min<T>(PhantomData<T>);

impl<T> Min<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, Option<T>, T> for Min<T>
where
    T: Ord + Send + Sync + 'static,
{
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) if v < *cur => *cur = v,
            Some(_) => {}
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<T>, other: Option<T>) {
        if let Some(v) = other {
            self.add_input(acc, v);
        }
    }

    fn finish(&self, acc: Option<T>) -> T {
        acc.expect("Min::finish called on empty group")
    }
}

/// Maximum value per group (requires `Ord`).
#[derive(Clone, Copy, Debug, Default)]
pub struct Max<T>(PhantomData<T>);

impl<T> Max<T> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> CombineFn<T, Option<T>, T> for Max<T>
where
    T: Ord + Send + Sync + 'static,
{
    fn create(&self) -> Option<T> {
        None
    }

    fn add_input(&self, acc: &mut Option<T>, v: T) {
        match acc {
            Some(cur) if v > *cur => *cur = v,
            Some(_) => {}
            None => *acc = Some(v),
        }
    }

    fn merge(&self, acc: &mut Option<T>, other: Option<T>) {
        if let Some(v) = other {
            self.add_input(acc, v);
        }
    }

    fn finish(&self, acc: Option<T>) -> T {
        acc.expect("Max::finish called on empty group")
    }
}
