#![allow(dead_code)]

use std::collections::VecDeque;

use policypass::pass::charset::{CharClass, classify};
use policypass::{OsRandom, RandomSource, Result};

/// Replays scripted `uniform_int` results, then falls back to the OS source.
pub struct Scripted {
    script: VecDeque<usize>,
    fallback: OsRandom,
    pub draws: usize,
}

impl Scripted {
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: OsRandom::new(),
            draws: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for Scripted {
    fn next_u64(&mut self) -> Result<u64> {
        self.fallback.next_u64()
    }

    fn uniform_int(&mut self, n: usize) -> Result<usize> {
        self.draws += 1;
        match self.script.pop_front() {
            Some(v) => {
                assert!(v < n, "scripted value {v} out of range {n}");
                Ok(v)
            }
            None => self.fallback.uniform_int(n),
        }
    }
}

/// Replays the same script forever.
pub struct Looping {
    script: Vec<usize>,
    pos: usize,
}

impl Looping {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, pos: 0 }
    }
}

impl RandomSource for Looping {
    fn next_u64(&mut self) -> Result<u64> {
        unreachable!("Looping only scripts uniform_int")
    }

    fn uniform_int(&mut self, n: usize) -> Result<usize> {
        let v = self.script[self.pos % self.script.len()];
        self.pos += 1;
        assert!(v < n, "scripted value {v} out of range {n}");
        Ok(v)
    }
}

pub fn count(password: &str, class: CharClass) -> usize {
    password.chars().filter(|&c| classify(c) == class).count()
}

/// Draws that make the generator emit `target` from an all-zero-minimum
/// policy without exclusions: one fill index per character, then an
/// identity shuffle.
pub fn script_for(target: &str, fill: &[char]) -> Vec<usize> {
    let mut script: Vec<usize> = target
        .chars()
        .map(|c| fill.iter().position(|&f| f == c).expect("char in fill"))
        .collect();
    let len = target.chars().count();
    script.extend((1..len).rev());
    script
}
