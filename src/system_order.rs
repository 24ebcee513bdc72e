//! Central system ordering labels to make the per-tick sequence explicit.
//! Within one Update tick:
//! 1. Input (start trigger / flap impulse)
//! 2. Movement (tilt, world-bounds clamp; Rapier integrates separately)
//! 3. Scoring (pass-detection against post-movement positions)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct MovementSet;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct ScoringSet;
