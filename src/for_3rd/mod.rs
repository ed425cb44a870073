//! Implementation of traits of third party crates.

mod de;
mod ser;
