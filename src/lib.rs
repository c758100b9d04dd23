//! # rgb-evolve
//!
//! A genetic algorithm that evolves 24-bit chromosomes toward a target RGB color.
//!
//! Each chromosome decodes into three big-endian bytes (red, green, blue) and its
//! fitness is the Euclidean distance to the target color, so lower is better.
//! Every generation applies four tournament-driven operators in a fixed order and
//! then sorts the population best first.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rgb_evolve::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = ColorGA::builder()
//!     .target("111111110000000010000000".parse::<Target>()?)
//!     .population_size(50)
//!     .crossover_count(10)
//!     .mutation_count(10)
//!     .selection_count(5)
//!     .new_blood_count(1)
//!     .generations(200)
//!     .build()?
//!     .run(&mut rng)?;
//!
//! if let Some(best) = result.best {
//!     println!("{} -> {}", best.genome(), best.rgb());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod operators;
pub mod population;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
}
