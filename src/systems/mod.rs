pub mod sdk;
pub mod achievements;
pub mod generator;
pub mod patterns;
pub mod profile;
#[cfg(feature="system-hint_advisor")] pub mod hint_advisor;
