//! Runtime orchestration tests.
//!
//! # Test Strategy
//!
//! A scripted driver feeds a fixed sequence of events into the generic
//! [`Runtime`] and records what the runtime asked it to do. Tests end with
//! oracle checks on:
//! - The outcome and the screen the navigator landed on
//! - Focus requests and renders seen by the driver
//! - Requests seen by the verifier

use std::collections::VecDeque;

use roost_app::{
    Driver, FixedCodeVerifier, FlowConfig, FlowEvent, FlowOutcome, KeyInput, Navigator, OtpFlow,
    Runtime, Screen, VerificationKind, VerificationTarget,
};

/// Driver replaying a fixed event script.
///
/// Quits once the script runs out.
#[derive(Default)]
struct ScriptedDriver {
    events: VecDeque<Option<FlowEvent>>,
    renders: usize,
    focused: Vec<usize>,
    screens: Vec<Screen>,
    stopped: bool,
}

impl ScriptedDriver {
    fn new(events: impl IntoIterator<Item = FlowEvent>) -> Self {
        Self { events: events.into_iter().map(Some).collect(), ..Self::default() }
    }

    /// Script typing `keys` followed by Enter.
    fn typing(keys: &str) -> Self {
        let mut events: Vec<FlowEvent> =
            keys.chars().map(|c| FlowEvent::Key(KeyInput::Char(c))).collect();
        events.push(FlowEvent::Key(KeyInput::Enter));
        Self::new(events)
    }
}

impl Driver for ScriptedDriver {
    type Error = std::io::Error;

    async fn poll_event(&mut self) -> Result<Option<FlowEvent>, Self::Error> {
        Ok(self.events.pop_front().unwrap_or(Some(FlowEvent::QuitRequested)))
    }

    fn render(&mut self, _flow: &OtpFlow) -> Result<(), Self::Error> {
        self.renders += 1;
        Ok(())
    }

    fn focus_cell(&mut self, index: usize) {
        self.focused.push(index);
    }

    fn navigate(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

fn runtime(
    driver: ScriptedDriver,
    target: VerificationTarget,
) -> Runtime<ScriptedDriver, FixedCodeVerifier> {
    let kind = target.kind;
    let flow = OtpFlow::new(target, FlowConfig::default()).expect("valid flow");
    Runtime::new(driver, FixedCodeVerifier::new("123456"), flow, Navigator::for_verification(kind))
}

#[tokio::test]
async fn email_verification_continues_to_personal_details() {
    let driver = ScriptedDriver::typing("123456");
    let mut runtime = runtime(driver, VerificationTarget::email("exampleuser@gmail.com"));

    let outcome = runtime.run().await.expect("run");

    assert_eq!(outcome, FlowOutcome::Completed(Screen::PersonalDetails));
    assert_eq!(runtime.navigator().current(), Screen::PersonalDetails);
    assert_eq!(runtime.driver().screens, vec![Screen::PersonalDetails]);
    assert_eq!(runtime.driver().focused, vec![0, 1, 2, 3, 4, 5]);
    assert!(runtime.driver().stopped);
}

#[tokio::test]
async fn phone_verification_continues_to_success() {
    let driver = ScriptedDriver::typing("123456");
    let mut runtime = runtime(driver, VerificationTarget::phone("+911234567890"));

    let outcome = runtime.run().await.expect("run");

    assert_eq!(outcome, FlowOutcome::Completed(Screen::Success));
    assert_eq!(runtime.flow().kind(), VerificationKind::Phone);
}

#[tokio::test]
async fn wrong_code_stays_on_otp_screen() {
    let driver = ScriptedDriver::typing("000000");
    let mut runtime = runtime(driver, VerificationTarget::phone("+911234567890"));

    // Script ends after the rejection, so the driver quits
    let outcome = runtime.run().await.expect("run");

    assert_eq!(outcome, FlowOutcome::Quit);
    assert_eq!(runtime.navigator().current(), Screen::OtpVerification);
    assert_eq!(runtime.flow().status_message(), Some("The code you entered is incorrect"));
    assert!(runtime.flow().code().is_complete());
}

#[tokio::test]
async fn incomplete_code_is_not_sent_to_verifier() {
    let driver = ScriptedDriver::typing("123");
    let mut runtime = runtime(driver, VerificationTarget::email("exampleuser@gmail.com"));

    let outcome = runtime.run().await.expect("run");

    assert_eq!(outcome, FlowOutcome::Quit);
    assert_eq!(runtime.flow().status_message(), Some("Please enter the complete 6-digit code"));
}

#[tokio::test]
async fn resend_reaches_verifier_and_updates_status() {
    let driver = ScriptedDriver::new([FlowEvent::ResendPressed, FlowEvent::ResendPressed]);
    let mut runtime = runtime(driver, VerificationTarget::phone("+911234567890"));

    runtime.run().await.expect("run");

    assert_eq!(runtime.verifier().sent(), 2);
    assert_eq!(runtime.flow().status_message(), Some("A new code was sent to +XXXXXXXX7890"));
}

#[tokio::test]
async fn back_returns_to_origin_screen() {
    let driver = ScriptedDriver::new([FlowEvent::Key(KeyInput::Char('1')), FlowEvent::BackPressed]);
    let mut runtime = runtime(driver, VerificationTarget::phone("+911234567890"));

    let outcome = runtime.run().await.expect("run");

    assert_eq!(outcome, FlowOutcome::Back(Some(Screen::Login)));
    assert_eq!(runtime.driver().screens, vec![Screen::Login]);
}

#[tokio::test]
async fn idle_polls_do_not_end_the_loop() {
    let mut driver = ScriptedDriver::default();
    driver.events = VecDeque::from([None, None, Some(FlowEvent::Tick), None]);
    let mut runtime = runtime(driver, VerificationTarget::phone("+911234567890"));

    let outcome = runtime.run().await.expect("run");

    assert_eq!(outcome, FlowOutcome::Quit);
    // Only the initial render happened
    assert_eq!(runtime.driver().renders, 1);
}

#[tokio::test]
async fn runtime_enters_otp_screen_when_navigator_is_elsewhere() {
    let flow =
        OtpFlow::new(VerificationTarget::phone("+15550001111"), FlowConfig::default()).expect("flow");
    let runtime = Runtime::new(
        ScriptedDriver::default(),
        FixedCodeVerifier::new("123456"),
        flow,
        Navigator::new(Screen::Login),
    );

    assert_eq!(runtime.navigator().current(), Screen::OtpVerification);
    assert_eq!(runtime.navigator().depth(), 2);
}
