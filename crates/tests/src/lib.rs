#[cfg(test)]
mod common;

#[cfg(test)]
mod selection_tests;

#[cfg(test)]
mod metrics_tests;

#[cfg(test)]
mod view_plan_tests;

#[cfg(test)]
mod dataset_tests;

#[cfg(test)]
mod config_tests;
