/*!
Semi-private stuff that you usually don't need to access directly
 */

#![allow(missing_docs)]

pub mod algorithm;
pub mod cubes;
pub mod tetrahedra;

mod aux_tables;
mod density_caching;
mod tables_wrapper;
