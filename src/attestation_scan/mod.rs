/// Attestation scanning - domain models and services
///
/// Pure pipeline logic: the domain types carried through the scan and
/// the services that batch, aggregate and rank them. Nothing in here
/// performs I/O directly; network and filesystem access live behind the
/// outbound ports.
pub mod domain;
pub mod services;
