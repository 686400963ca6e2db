//! Producer verification contract driven through the simulator

use harvest_contracts::Simulator;
use harvest_core::{DispatchError, Response, Value};

const OWNER: &str = "ST1SJ3DTE5DN7X54YDH5D64R3BCB6A2AG2ZQ8YPD5";
const PRODUCER: &str = "ST2CY5V39NHDPWSXMW9QDT3HC3GD6Q6XX4CFRK9AG";
const CONTRACT: &str = "producer-verification";

fn setup() -> Simulator {
    let mut sim = Simulator::new(OWNER, 100);
    sim.set_sender(OWNER);
    sim
}

fn register(sim: &mut Simulator, producer: &str) -> Response {
    sim.call(
        CONTRACT,
        "register-producer",
        &[producer.into(), "Organic Farm".into(), "California".into()],
    )
    .unwrap()
}

fn verify(sim: &mut Simulator, producer: &str) -> Response {
    sim.call(CONTRACT, "verify-producer", &[producer.into()]).unwrap()
}

fn is_verified(sim: &mut Simulator, producer: &str) -> Response {
    sim.call(CONTRACT, "is-producer-verified", &[producer.into()])
        .unwrap()
}

// ============================================================================
// REGISTRATION
// ============================================================================

#[test]
fn test_register_new_producer() {
    let mut sim = setup();
    let result = register(&mut sim, PRODUCER);
    assert!(result.is_ok());
    assert_eq!(result.value(), Some(&Value::Bool(true)));
}

#[test]
fn test_register_fails_if_not_owner() {
    let mut sim = setup();
    sim.set_sender(PRODUCER);

    let result = register(&mut sim, PRODUCER);
    assert!(result.is_err());
    assert_eq!(result.error_code(), Some(1));
}

#[test]
fn test_duplicate_registration_any_sender() {
    let mut sim = setup();
    assert!(register(&mut sim, PRODUCER).is_ok());

    assert_eq!(register(&mut sim, PRODUCER).error_code(), Some(2));

    // A non-owner is rejected on ownership before the duplicate check
    sim.set_sender(PRODUCER);
    assert_eq!(register(&mut sim, PRODUCER).error_code(), Some(1));
}

#[test]
fn test_registration_date_follows_block_height() {
    let mut sim = setup();
    sim.set_block_height(4242);
    register(&mut sim, PRODUCER);

    let producer = sim.producers().producer(&PRODUCER.into()).unwrap();
    assert_eq!(producer.registration_date, 4242);
    assert!(!producer.verified);
}

// ============================================================================
// VERIFICATION
// ============================================================================

#[test]
fn test_verify_producer() {
    let mut sim = setup();
    register(&mut sim, PRODUCER);

    let result = verify(&mut sim, PRODUCER);
    assert!(result.is_ok());
}

#[test]
fn test_check_producer_verified() {
    let mut sim = setup();
    register(&mut sim, PRODUCER);

    assert_eq!(is_verified(&mut sim, PRODUCER), Response::ok(false));
    verify(&mut sim, PRODUCER);

    let result = is_verified(&mut sim, PRODUCER);
    assert!(result.is_ok());
    assert_eq!(result.value(), Some(&Value::Bool(true)));
}

#[test]
fn test_verify_unregistered() {
    let mut sim = setup();
    assert_eq!(verify(&mut sim, PRODUCER).error_code(), Some(3));
}

#[test]
fn test_verify_requires_owner() {
    let mut sim = setup();
    register(&mut sim, PRODUCER);

    sim.set_sender(PRODUCER);
    assert_eq!(verify(&mut sim, PRODUCER).error_code(), Some(1));
    assert_eq!(is_verified(&mut sim, PRODUCER), Response::ok(false));
}

#[test]
fn test_repeated_verification_is_idempotent() {
    let mut sim = setup();
    register(&mut sim, PRODUCER);

    assert!(verify(&mut sim, PRODUCER).is_ok());
    assert!(verify(&mut sim, PRODUCER).is_ok());
    assert_eq!(is_verified(&mut sim, PRODUCER), Response::ok(true));
}

#[test]
fn test_query_is_public() {
    let mut sim = setup();
    register(&mut sim, PRODUCER);
    verify(&mut sim, PRODUCER);

    sim.set_sender("ST3ANYBODY");
    assert_eq!(is_verified(&mut sim, PRODUCER), Response::ok(true));
}

#[test]
fn test_query_unknown_producer() {
    let mut sim = setup();
    assert_eq!(is_verified(&mut sim, PRODUCER), Response::err(4));
}

// ============================================================================
// DISPATCH FAULTS
// ============================================================================

#[test]
fn test_unknown_method_is_a_fault() {
    let mut sim = setup();
    let err = sim.call(CONTRACT, "certify-product", &[]).unwrap_err();
    assert!(matches!(err, DispatchError::UnknownMethod { .. }));
}

#[test]
fn test_malformed_arguments_are_faults() {
    let mut sim = setup();

    let err = sim
        .call(CONTRACT, "verify-producer", &[Value::Int(7)])
        .unwrap_err();
    assert!(matches!(err, DispatchError::ArgumentType { index: 0, .. }));

    let err = sim.call(CONTRACT, "is-producer-verified", &[]).unwrap_err();
    assert!(matches!(err, DispatchError::ArgumentCount { expected: 1, actual: 0, .. }));
}
