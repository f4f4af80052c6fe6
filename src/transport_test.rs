use std::cell::RefCell;

use futures::executor::block_on;

use super::*;

/// Records calls instead of touching the network or a clock.
struct FakeTransport {
    status: Result<u16, String>,
    posted: RefCell<Vec<WebhookRequest>>,
    slept: RefCell<Vec<u32>>,
}

impl FakeTransport {
    fn answering(status: Result<u16, String>) -> Self {
        Self { status, posted: RefCell::new(Vec::new()), slept: RefCell::new(Vec::new()) }
    }
}

impl Transport for FakeTransport {
    async fn post(&self, request: &WebhookRequest) -> Result<u16, TransportError> {
        self.posted.borrow_mut().push(request.clone());
        self.status.clone().map_err(TransportError::Send)
    }

    async fn sleep(&self, ms: u32) {
        self.slept.borrow_mut().push(ms);
    }
}

fn post_plan() -> SubmitPlan {
    SubmitPlan::Post(WebhookRequest {
        endpoint: "https://hooks.example.com/signup".to_owned(),
        mode: TransportMode::NoCors,
        body: r#"{"type":"Clinic"}"#.to_owned(),
    })
}

#[test]
fn classify_opaque_status_as_dispatched() {
    assert_eq!(classify_status(0), DispatchOutcome::Dispatched);
}

#[test]
fn classify_visible_statuses() {
    assert_eq!(classify_status(200), DispatchOutcome::Accepted(200));
    assert_eq!(classify_status(204), DispatchOutcome::Accepted(204));
    assert_eq!(classify_status(302), DispatchOutcome::Rejected(302));
    assert_eq!(classify_status(500), DispatchOutcome::Rejected(500));
}

#[test]
fn success_outcomes() {
    assert!(DispatchOutcome::Simulated.is_success());
    assert!(DispatchOutcome::Dispatched.is_success());
    assert!(DispatchOutcome::Accepted(200).is_success());
    assert!(!DispatchOutcome::Rejected(400).is_success());
    assert!(!DispatchOutcome::Failed("x".to_owned()).is_success());
}

#[test]
fn simulate_waits_without_posting() {
    let transport = FakeTransport::answering(Ok(0));
    let outcome = block_on(execute(&transport, &SubmitPlan::Simulate { delay_ms: 1000 }));
    assert_eq!(outcome, DispatchOutcome::Simulated);
    assert_eq!(*transport.slept.borrow(), vec![1000]);
    assert!(transport.posted.borrow().is_empty());
}

#[test]
fn post_sends_request_once() {
    let transport = FakeTransport::answering(Ok(0));
    let outcome = block_on(execute(&transport, &post_plan()));
    assert_eq!(outcome, DispatchOutcome::Dispatched);
    let posted = transport.posted.borrow();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].body, r#"{"type":"Clinic"}"#);
    assert!(transport.slept.borrow().is_empty());
}

#[test]
fn transport_failure_becomes_failed_outcome() {
    let transport = FakeTransport::answering(Err("TypeError: Failed to fetch".to_owned()));
    let outcome = block_on(execute(&transport, &post_plan()));
    assert_eq!(
        outcome,
        DispatchOutcome::Failed("request send failed: TypeError: Failed to fetch".to_owned())
    );
}

#[test]
fn outcome_display_is_readable() {
    assert_eq!(DispatchOutcome::Rejected(403).to_string(), "rejected (403)");
    assert_eq!(DispatchOutcome::Dispatched.to_string(), "dispatched (opaque response)");
}
