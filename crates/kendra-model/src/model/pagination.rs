//! Continuation-token pagination for list operations.
//!
//! A page that carries a token means more pages exist, even when the page
//! itself is empty. A page without a token is the last one. Once a chain of
//! pages is exhausted it stays exhausted.

use super::ids::PageToken;
use crate::{ModelError, ModelResult};

/// A response carrying one page of items.
pub trait Paginated {
    type Item;

    fn items(&self) -> &[Self::Item];

    fn next_token(&self) -> Option<&PageToken>;

    fn has_more(&self) -> bool {
        self.next_token().is_some()
    }
}

/// A request that can resume a list from a continuation token.
pub trait PageRequest: Clone {
    fn page_token(&self) -> Option<&PageToken>;

    fn set_page_token(&mut self, token: Option<PageToken>);
}

/// Copy `template` with its token set to the one `envelope` returned.
pub fn next_page<Req, Resp>(envelope: &Resp, template: &Req) -> ModelResult<Req>
where
    Req: PageRequest,
    Resp: Paginated,
{
    let token = envelope.next_token().ok_or(ModelError::NoMorePages)?;
    let mut request = template.clone();
    request.set_page_token(Some(token.clone()));
    Ok(request)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No page has been received yet.
    Start,
    /// The last page carried a token.
    HasMore,
    /// The last page carried no token. Terminal.
    Exhausted,
}

/// Drives a chain of list requests from a template.
#[derive(Debug, Clone)]
pub struct Paginator<Req> {
    template: Req,
    pending: Option<Req>,
    state: PageState,
    pages_seen: usize,
}

impl<Req: PageRequest> Paginator<Req> {
    /// Start paging with `template`. Its own token, if any, is where paging begins.
    pub fn new(template: Req) -> Self {
        Self {
            pending: Some(template.clone()),
            template,
            state: PageState::Start,
            pages_seen: 0,
        }
    }

    pub fn state(&self) -> PageState {
        self.state
    }

    pub fn pages_seen(&self) -> usize {
        self.pages_seen
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == PageState::Exhausted
    }

    /// Take the request to send next, if one is due.
    pub fn next_request(&mut self) -> Option<Req> {
        self.pending.take()
    }

    /// Record a received page and return the request for the following one.
    ///
    /// Fails with [`ModelError::NoMorePages`] when the page ends the chain, and
    /// on every call after that.
    pub fn observe<Resp: Paginated>(&mut self, page: &Resp) -> ModelResult<Req> {
        if self.state == PageState::Exhausted {
            return Err(ModelError::NoMorePages);
        }
        self.pages_seen += 1;
        match next_page(page, &self.template) {
            Ok(request) => {
                log::debug!(
                    "[Paginator] Page {} returned {} items, more pages follow",
                    self.pages_seen,
                    page.items().len()
                );
                self.state = PageState::HasMore;
                self.pending = Some(request.clone());
                Ok(request)
            }
            Err(err) => {
                log::debug!(
                    "[Paginator] Page {} returned {} items, chain exhausted",
                    self.pages_seen,
                    page.items().len()
                );
                self.state = PageState::Exhausted;
                self.pending = None;
                Err(err)
            }
        }
    }
}
