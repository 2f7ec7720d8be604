/*
 * Code shared between the solver binaries lives here.
 * Example import from this file: `use rope_bridge::helpers::parse;`.
 */

pub mod parse;
