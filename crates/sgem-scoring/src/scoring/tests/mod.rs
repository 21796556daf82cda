mod common;
mod indicators;
mod portfolio;
mod smart;
