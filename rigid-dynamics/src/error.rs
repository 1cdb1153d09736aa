// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Error types
//!
//! Normal gameplay use never produces an error: invalid handles, degenerate
//! masses and coincident bodies all resolve to no-ops. Only caller misuse of
//! the stepping API is reported.

use thiserror::Error;

/// Errors reported by [`World::update`](crate::World::update)
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum StepError {
    /// The timestep was zero, negative, NaN or infinite
    #[error("invalid timestep {0}: must be positive and finite")]
    InvalidTimestep(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message() {
        let err = StepError::InvalidTimestep(-0.5);
        assert_eq!(err.to_string(), "invalid timestep -0.5: must be positive and finite");
    }
}
