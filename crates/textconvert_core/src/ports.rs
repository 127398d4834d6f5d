//! Wrappers around host-supplied conversion and format functions.
//!
//! Both ports are pure `input -> output` mappings that may complete
//! synchronously or asynchronously and may fail. Applying their results is the
//! sync engine's job; the ports never touch pane state.

use crate::buffer::IndentWidth;
use crate::error::PortError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Future returned by a port invocation. Must be polled inside a tokio runtime.
pub type PortFuture = Pin<Box<dyn Future<Output = Result<String, PortError>> + Send + 'static>>;

type ConvertFn = dyn Fn(String) -> PortFuture + Send + Sync;
type FormatFn = dyn Fn(String, IndentWidth) -> PortFuture + Send + Sync;

/// Runs a synchronous port body on tokio's blocking pool, never on the task
/// that awaits it, so the call stays cancellable by a timeout.
fn on_blocking_pool<F>(body: F) -> PortFuture
where
    F: FnOnce() -> Result<String, PortError> + Send + 'static,
{
    Box::pin(async move {
        tokio::task::spawn_blocking(body)
            .await
            .unwrap_or_else(|err| Err(PortError::failed(format!("port panicked: {}", err))))
    })
}

/// One-directional conversion (`input -> output`).
#[derive(Clone)]
pub struct ConversionPort {
    func: Arc<ConvertFn>,
}

impl ConversionPort {
    /// Wrap a synchronous, fallible conversion.
    pub fn new<F, E>(f: F) -> Self
    where
        F: Fn(&str) -> Result<String, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        let f = Arc::new(f);
        Self {
            func: Arc::new(move |input: String| -> PortFuture {
                let f = Arc::clone(&f);
                on_blocking_pool(move || f(&input).map_err(|err| PortError::failed(err.to_string())))
            }),
        }
    }

    /// Wrap a synchronous conversion that cannot fail.
    pub fn map<F>(f: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Self {
            func: Arc::new(move |input: String| -> PortFuture {
                let f = Arc::clone(&f);
                on_blocking_pool(move || Ok(f(&input)))
            }),
        }
    }

    /// Wrap an asynchronous conversion.
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: Fn(String) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, PortError>> + Send + 'static,
    {
        Self {
            func: Arc::new(move |input: String| -> PortFuture { Box::pin(f(input)) }),
        }
    }

    pub fn identity() -> Self {
        Self::map(str::to_string)
    }

    pub fn call(&self, input: String) -> PortFuture {
        (self.func)(input)
    }
}

impl fmt::Debug for ConversionPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConversionPort").finish_non_exhaustive()
    }
}

/// Beautifier for one pane's own text, parameterized by indent width.
#[derive(Clone)]
pub struct FormatPort {
    func: Arc<FormatFn>,
}

impl FormatPort {
    /// Wrap a synchronous, fallible formatter.
    pub fn new<F, E>(f: F) -> Self
    where
        F: Fn(&str, IndentWidth) -> Result<String, E> + Send + Sync + 'static,
        E: fmt::Display,
    {
        let f = Arc::new(f);
        Self {
            func: Arc::new(move |input: String, indent: IndentWidth| -> PortFuture {
                let f = Arc::clone(&f);
                on_blocking_pool(move || {
                    f(&input, indent).map_err(|err| PortError::failed(err.to_string()))
                })
            }),
        }
    }

    /// Wrap an asynchronous formatter.
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: Fn(String, IndentWidth) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String, PortError>> + Send + 'static,
    {
        Self {
            func: Arc::new(move |input: String, indent: IndentWidth| -> PortFuture {
                Box::pin(f(input, indent))
            }),
        }
    }

    pub fn call(&self, input: String, indent: IndentWidth) -> PortFuture {
        (self.func)(input, indent)
    }
}

impl fmt::Debug for FormatPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatPort").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block_on(fut: PortFuture) -> Result<String, PortError> {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .expect("runtime")
            .block_on(fut)
    }

    #[test]
    fn sync_port_reports_failures_as_port_errors() {
        let port = ConversionPort::new(|input: &str| {
            if input.is_empty() {
                Err("empty input")
            } else {
                Ok(input.to_uppercase())
            }
        });
        assert_eq!(block_on(port.call("abc".to_string())), Ok("ABC".to_string()));
        assert_eq!(
            block_on(port.call(String::new())),
            Err(PortError::Failed("empty input".to_string()))
        );
    }

    #[test]
    fn async_port_resolves_through_future() {
        let port = ConversionPort::from_async(|input: String| async move {
            Ok::<String, PortError>(input.chars().rev().collect())
        });
        assert_eq!(block_on(port.call("abc".to_string())), Ok("cba".to_string()));
    }

    #[test]
    fn panicking_sync_port_becomes_failure() {
        let port = ConversionPort::map(|_: &str| -> String { panic!("converter bug") });
        let result = block_on(port.call("abc".to_string()));
        assert!(matches!(result, Err(PortError::Failed(message)) if message.starts_with("port panicked")));
    }

    #[test]
    fn format_port_receives_indent_width() {
        let port = FormatPort::new(|input: &str, indent: IndentWidth| {
            Ok::<_, std::convert::Infallible>(format!("{}{}", indent.unit(), input))
        });
        let two = IndentWidth::try_from(2).expect("valid width");
        assert_eq!(block_on(port.call("x".to_string(), two)), Ok("  x".to_string()));
        assert_eq!(
            block_on(port.call("x".to_string(), IndentWidth::TAB)),
            Ok("\tx".to_string())
        );
    }
}
