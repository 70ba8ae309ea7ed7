use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use crate::engine::painter::Pause;
use crate::engine::transport::{ApiRequest, RawResponse, Transport};
use crate::error::ApiResult;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Request(ApiRequest),
    Pause(Duration),
}

pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Records every request and replays scripted responses, `200 {}` once the
/// script runs dry.
pub struct FakeTransport {
    log: EventLog,
    script: RefCell<VecDeque<RawResponse>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            script: RefCell::new(VecDeque::new()),
        }
    }

    pub fn log(&self) -> EventLog {
        Rc::clone(&self.log)
    }

    pub fn respond(self, status: u16, body: &str) -> Self {
        self.script.borrow_mut().push_back(RawResponse {
            status,
            url: "https://example.test/api/".into(),
            body: body.to_string(),
        });
        self
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        self.log.borrow_mut().push(Event::Request(request.clone()));
        Ok(self
            .script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| RawResponse::ok(request.url.clone(), "{}")))
    }
}

pub struct RecordingPause {
    log: EventLog,
}

impl RecordingPause {
    pub fn new(log: EventLog) -> Self {
        Self { log }
    }
}

impl Pause for RecordingPause {
    fn pause(&mut self, duration: Duration) {
        self.log.borrow_mut().push(Event::Pause(duration));
    }
}

pub fn requests(log: &EventLog) -> Vec<ApiRequest> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Request(request) => Some(request.clone()),
            Event::Pause(_) => None,
        })
        .collect()
}
