//! Spring topology from startup tokens
//!
//! Each token after the program name describes one spring by embedding two
//! decimal digits anywhere in it: `1a2` links balls 1 and 2, `3x0` creates
//! ball 3 without a spring. Only single digits are recognised, so a scene
//! tops out at nine balls.

use std::fmt;

use crate::error::{InvalidInvocationSnafu, MalformedDescriptorSnafu, TopologyError};

/// A 1-based pair of ball indices. `0` in either slot means "no spring".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpringDescriptor {
    pub a: usize,
    pub b: usize,
}

impl SpringDescriptor {
    pub fn new(a: usize, b: usize) -> Self {
        Self { a, b }
    }

    /// The pair to link, or `None` for a sentinel or a self-pair
    pub fn endpoints(&self) -> Option<(usize, usize)> {
        if self.a == self.b || self.a == 0 || self.b == 0 {
            return None;
        }
        Some((self.a, self.b))
    }

    pub fn max_index(&self) -> usize {
        self.a.max(self.b)
    }
}

impl fmt::Display for SpringDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.a, self.b)
    }
}

/// What the scene builder needs: the springs to make and how many balls exist
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SceneConfig {
    pub descriptors: Vec<SpringDescriptor>,
    pub particle_count: usize,
}

impl SceneConfig {
    /// Wrap descriptors, counting balls as the largest index referenced (at least one)
    pub fn new(descriptors: Vec<SpringDescriptor>) -> Self {
        let particle_count = descriptors
            .iter()
            .map(SpringDescriptor::max_index)
            .fold(1, usize::max);
        Self {
            descriptors,
            particle_count,
        }
    }
}

/// Parse raw program arguments. The first item is the program name and is skipped.
pub fn parse_args<I, S>(args: I) -> Result<SceneConfig, TopologyError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let descriptors = args
        .into_iter()
        .skip(1)
        .enumerate()
        .map(|(i, token)| parse_descriptor(i + 1, token.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    snafu::ensure!(!descriptors.is_empty(), InvalidInvocationSnafu);

    Ok(SceneConfig::new(descriptors))
}

/// Extract the digits of one token, left to right, as a descriptor
pub fn parse_descriptor(position: usize, token: &str) -> Result<SpringDescriptor, TopologyError> {
    let digits: Vec<usize> = token
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as usize)
        .collect();

    match digits[..] {
        [a, b] => Ok(SpringDescriptor::new(a, b)),
        _ => MalformedDescriptorSnafu {
            position,
            token,
            digits: digits.len(),
        }
        .fail(),
    }
}
