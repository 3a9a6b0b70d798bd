//! Outbound navigation host-service contracts.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`NavigationService`].
pub type NavigationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for leaving or restarting the desktop shell.
pub trait NavigationService {
    /// Opens a URL (for example a document) outside the shell.
    fn open_url<'a>(&'a self, url: &'a str) -> NavigationFuture<'a, Result<(), String>>;

    /// Asks the user a yes/no question. Returns `true` when they accept.
    fn confirm(&self, message: &str) -> bool;

    /// Restarts the shell from scratch, as "Shut Down" does.
    fn reload(&self) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op navigation service for unsupported targets.
pub struct NoopNavigationService;

impl NavigationService for NoopNavigationService {
    fn open_url<'a>(&'a self, _url: &'a str) -> NavigationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }

    fn confirm(&self, _message: &str) -> bool {
        true
    }

    fn reload(&self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Default)]
struct NavigationLog {
    answer: bool,
    opened: Vec<String>,
    prompts: Vec<String>,
    reloads: usize,
}

#[derive(Debug, Clone, Default)]
/// Navigation service that records every request and answers prompts with a fixed reply.
pub struct RecordingNavigationService {
    log: Rc<RefCell<NavigationLog>>,
}

impl RecordingNavigationService {
    /// Creates a recorder whose confirmation prompts return `answer`.
    pub fn answering(answer: bool) -> Self {
        let service = Self::default();
        service.log.borrow_mut().answer = answer;
        service
    }

    /// URLs passed to [`NavigationService::open_url`], in order.
    pub fn opened(&self) -> Vec<String> {
        self.log.borrow().opened.clone()
    }

    /// Messages shown through [`NavigationService::confirm`], in order.
    pub fn prompts(&self) -> Vec<String> {
        self.log.borrow().prompts.clone()
    }

    /// Number of reload requests.
    pub fn reloads(&self) -> usize {
        self.log.borrow().reloads
    }
}

impl NavigationService for RecordingNavigationService {
    fn open_url<'a>(&'a self, url: &'a str) -> NavigationFuture<'a, Result<(), String>> {
        self.log.borrow_mut().opened.push(url.to_string());
        Box::pin(async { Ok(()) })
    }

    fn confirm(&self, message: &str) -> bool {
        let mut log = self.log.borrow_mut();
        log.prompts.push(message.to_string());
        log.answer
    }

    fn reload(&self) -> Result<(), String> {
        self.log.borrow_mut().reloads += 1;
        Ok(())
    }
}
