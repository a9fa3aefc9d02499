#[cfg(test)]
mod common;

#[cfg(test)]
mod sidebar_scenario_tests;

#[cfg(test)]
mod persistence_tests;

#[cfg(test)]
mod navigation_tests;
