//! Damped springs and the network built from spring descriptors

use crate::constants::{SPRING_DAMPING, SPRING_REST_LENGTH, SPRING_STIFFNESS};
use crate::error::{SpringEndpointOutOfRangeSnafu, TopologyError};
use crate::topology::SpringDescriptor;

/// A damped spring between two particle slots (0-based)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub a: usize,
    pub b: usize,
    pub rest_length: f32,
    pub stiffness: f32,
    pub damping: f32,
}

impl Spring {
    /// Spring with the standard rest length, stiffness and damping
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            a,
            b,
            rest_length: SPRING_REST_LENGTH,
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }

    pub fn with_rest_length(mut self, rest_length: f32) -> Self {
        self.rest_length = rest_length;
        self
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }
}

/// Every spring in the scene. Springs are only ever added.
#[derive(Clone, Debug, Default)]
pub struct SpringNetwork {
    springs: Vec<Spring>,
}

impl SpringNetwork {
    /// Build springs from 1-based descriptors.
    ///
    /// Self-pairs and pairs with a `0` slot create nothing. Parallel springs
    /// between the same pair are kept and act independently.
    pub fn from_descriptors(
        descriptors: &[SpringDescriptor],
        particle_count: usize,
        template: Spring,
    ) -> Result<Self, TopologyError> {
        let mut network = Self::default();
        for descriptor in descriptors {
            let Some((a, b)) = descriptor.endpoints() else {
                log::debug!("No spring for descriptor {descriptor}");
                continue;
            };
            let index = a.max(b);
            snafu::ensure!(
                index <= particle_count,
                SpringEndpointOutOfRangeSnafu {
                    index,
                    particle_count
                }
            );
            network.add(Spring {
                a: a - 1,
                b: b - 1,
                ..template
            });
        }
        Ok(network)
    }

    pub fn add(&mut self, spring: Spring) {
        self.springs.push(spring);
    }

    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Spring> {
        self.springs.iter()
    }
}
