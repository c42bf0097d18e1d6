//! Offset pagination primitives shared by backend endpoints.
//!
//! A [`PageRequest`] names a zero-based page number and a page size. A
//! [`Page`] carries one slice of results together with the total number of
//! matching elements and serialises to the envelope the web client reads:
//!
//! ```json
//! {
//!   "content": [],
//!   "totalElements": 0,
//!   "totalPages": 0,
//!   "size": 4,
//!   "number": 0,
//!   "numberOfElements": 0,
//!   "first": true,
//!   "last": true,
//!   "empty": true
//! }
//! ```
//!
//! Pages past the end are valid: they report the real totals and carry no
//! content.

use std::num::NonZeroU32;

use serde::Serialize;
use thiserror::Error;

/// Errors raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// The requested page size was zero.
    #[error("page size must be at least one")]
    ZeroSize,
}

/// Zero-based page number plus page size.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::try_new(2, 4).expect("non-zero size");
/// assert_eq!(request.offset(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: u32,
    size: NonZeroU32,
}

impl PageRequest {
    /// Build a request for page `number` holding at most `size` elements.
    #[must_use]
    pub const fn new(number: u32, size: NonZeroU32) -> Self {
        Self { number, size }
    }

    /// Like [`PageRequest::new`] for a size that has not been checked yet.
    ///
    /// # Errors
    /// Returns [`PageRequestError::ZeroSize`] when `size` is zero.
    pub const fn try_new(number: u32, size: u32) -> Result<Self, PageRequestError> {
        match NonZeroU32::new(size) {
            Some(size) => Ok(Self::new(number, size)),
            None => Err(PageRequestError::ZeroSize),
        }
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Maximum number of elements on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size.get()
    }

    /// Number of elements that precede this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.number) * u64::from(self.size.get())
    }
}

/// One page of results and the totals it was cut from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    content: Vec<T>,
    request: PageRequest,
    total_elements: u64,
}

impl<T> Page<T> {
    /// Assemble a page from its content, the originating request and the total
    /// number of elements across all pages.
    #[must_use]
    pub const fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            request,
            total_elements,
        }
    }

    /// Elements on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Consume the page and return its elements.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }

    /// Zero-based page number.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.request.number()
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.request.size()
    }

    /// Total number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of pages needed to hold every element.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_elements.div_ceil(u64::from(self.size()))
    }

    /// Number of elements actually present on this page.
    #[must_use]
    pub fn number_of_elements(&self) -> usize {
        self.content.len()
    }

    /// Whether this is the first page.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.request.number() == 0
    }

    /// Whether no page follows this one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        u64::from(self.number()) + 1 >= self.total_pages()
    }

    /// Whether the page carries no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Convert every element while keeping the page metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            request: self.request,
            total_elements: self.total_elements,
        }
    }
}

/// Wire shape of a [`Page`], with the derived totals spelled out.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PageDto<'a, T> {
    content: &'a [T],
    total_elements: u64,
    total_pages: u64,
    size: u32,
    number: u32,
    number_of_elements: usize,
    first: bool,
    last: bool,
    empty: bool,
}

impl<'a, T> From<&'a Page<T>> for PageDto<'a, T> {
    fn from(page: &'a Page<T>) -> Self {
        Self {
            content: &page.content,
            total_elements: page.total_elements(),
            total_pages: page.total_pages(),
            size: page.size(),
            number: page.number(),
            number_of_elements: page.number_of_elements(),
            first: page.is_first(),
            last: page.is_last(),
            empty: page.is_empty(),
        }
    }
}

impl<T: Serialize> Serialize for Page<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        PageDto::from(self).serialize(serializer)
    }
}
