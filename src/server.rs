//! HTTP server: bind once, accept forever.
//!
//! There is deliberately no shutdown path. The container this program
//! demonstrates is stopped from the outside (`docker stop`, pod deletion),
//! and the process runs until then. The only failure treated as fatal is the
//! bind itself; per-connection errors are logged and the loop keeps
//! accepting.

use std::net::SocketAddr;

use hyper::service::service_fn;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder as ConnBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::error::Error;
use crate::routes;

/// The HTTP server, already bound to its listening socket.
pub struct Server {
    listener: TcpListener,
    addr: SocketAddr,
}

impl Server {
    /// Binds the listening socket.
    ///
    /// Binding is the one thing that can fail at startup (port already in
    /// use, insufficient privileges), so it is separated from
    /// [`serve`](Server::serve) and returns the error for the caller to treat
    /// as fatal.
    pub async fn bind(addr: SocketAddr) -> Result<Self, Error> {
        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        info!(%addr, "listening");
        Ok(Self { listener, addr })
    }

    /// The address actually bound. Differs from the requested address when
    /// binding port 0.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Accepts connections and dispatches requests until the process is
    /// killed.
    ///
    /// Never returns on the happy path. Accept errors are transient (the
    /// socket itself stays valid), so they are logged and the loop continues.
    pub async fn serve(self) -> Result<(), Error> {
        loop {
            let (stream, remote_addr) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    error!("accept error: {e}");
                    continue;
                }
            };

            // TokioIo adapts tokio's AsyncRead/AsyncWrite to the hyper IO
            // traits.
            let io = TokioIo::new(stream);

            tokio::spawn(async move {
                // `service_fn` calls `handle` once per request on the
                // connection, not once per connection.
                let svc = service_fn(handle);

                // `auto::Builder` transparently handles both HTTP/1.1 and
                // HTTP/2, whatever the client negotiates.
                if let Err(e) = ConnBuilder::new(TokioExecutor::new())
                    .serve_connection(io, svc)
                    .await
                {
                    error!(peer = %remote_addr, "connection error: {e}");
                }
            });
        }
    }
}

/// Routes one request and produces one response.
///
/// The error type is [`Infallible`](std::convert::Infallible): every outcome,
/// including the 404 fall-through, is an ordinary response, so hyper never
/// sees an error.
async fn handle(
    req: hyper::Request<hyper::body::Incoming>,
) -> Result<http::Response<http_body_util::Full<bytes::Bytes>>, std::convert::Infallible> {
    let response = routes::dispatch(req.method(), req.uri().path()).await;
    Ok(response.into_http())
}
