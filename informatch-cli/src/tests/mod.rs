//! Shared test harness modules for the Informatch CLI.

use super::*;

mod helpers;
