//! # Aishaura Storefront Shell
//!
//! The orchestration layer between the web frontend and the pure domain
//! logic. The frontend calls commands; commands mutate state, persist the
//! cart, and project the result back through [`view::StorefrontView`].
//!
//! ## Module Organization
//! ```text
//! aishaura_store/
//! ├── lib.rs          ◄─── You are here (Storefront owner + startup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── Cart state + totals
//! │   ├── catalog.rs  ◄─── Catalog state (wholesale replace)
//! │   └── config.rs   ◄─── Store configuration
//! ├── commands/
//! │   ├── cart.rs     ◄─── add/update/remove/clear
//! │   ├── checkout.rs ◄─── open/continue/back/select + step rendering
//! │   ├── order.rs    ◄─── the submission protocol
//! │   ├── catalog.rs  ◄─── startup/refresh catalog loads
//! │   └── contact.rs  ◄─── WhatsApp share links + badge state
//! ├── storage.rs      ◄─── durable local storage (cart & flags)
//! ├── view.rs         ◄─── the presentation seam
//! └── error.rs        ◄─── user-facing error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()          env-filtered structured logging            │
//! │  2. StoreConfig::from_env() endpoints, UPI details, data dir           │
//! │  3. LocalStore::open()      durable storage; cart rehydrated           │
//! │  4. SheetsClient::new()     bounded-timeout HTTP client                │
//! │  5. startup()               concurrent products+reviews fetch,         │
//! │                             empty-catalog fallback, first cart render  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;
pub mod storage;
pub mod view;

use std::sync::{Arc, Mutex};

use tracing_subscriber::EnvFilter;

use aishaura_core::checkout::{CheckoutSession, CheckoutStep};
use aishaura_sheets::SheetsClient;

use crate::error::StoreError;
use crate::state::{CartResponse, CartState, CatalogState, StoreConfig};
use crate::storage::LocalStore;
use crate::view::StorefrontView;

/// The storefront: owns every piece of client state and the command
/// surface the frontend drives.
///
/// All mutations run through named commands (see the `commands` modules);
/// there are no ad hoc field writes from the outside.
pub struct Storefront {
    pub(crate) config: StoreConfig,
    pub(crate) sheets: SheetsClient,
    pub(crate) store: LocalStore,
    pub(crate) catalog: CatalogState,
    pub(crate) cart: CartState,
    /// `Some` while the checkout modal is open. A fresh session is created
    /// on every open - partial checkouts never resume.
    pub(crate) session: Mutex<Option<CheckoutSession>>,
    pub(crate) view: Arc<dyn StorefrontView>,
}

impl Storefront {
    /// Wires up the shell: HTTP client, durable storage, rehydrated cart.
    ///
    /// # Errors
    ///
    /// Fails only when the HTTP client can't be built or the data
    /// directory can't be created; a corrupt persisted cart is NOT an
    /// error (it rehydrates as empty).
    pub fn new(config: StoreConfig, view: Arc<dyn StorefrontView>) -> Result<Self, StoreError> {
        let sheets = SheetsClient::new(config.sheets.clone())?;
        let store = LocalStore::open(config.data_dir.as_deref())?;
        let cart = CartState::new(store.load_cart());

        Ok(Storefront {
            config,
            sheets,
            store,
            catalog: CatalogState::new(),
            cart,
            session: Mutex::new(None),
            view,
        })
    }

    /// Runs the startup sequence: loads the catalog (falling back to empty
    /// on failure) and renders the rehydrated cart. Returns the number of
    /// products loaded.
    pub async fn startup(&self) -> usize {
        let count = self.load_catalog().await;
        self.render_cart();
        count
    }

    /// Re-renders the cart drawer from live state.
    pub(crate) fn render_cart(&self) {
        let snapshot = self.cart.snapshot();
        let totals = state::CartTotals::from(&snapshot);
        self.view.render_cart(&snapshot, &totals);
    }

    /// Current cart contents and totals.
    pub fn get_cart(&self) -> CartResponse {
        self.cart.with_cart(|cart| CartResponse::from(cart))
    }

    /// The checkout step currently showing, if the flow is open.
    pub fn checkout_step(&self) -> Option<CheckoutStep> {
        self.session
            .lock()
            .expect("Session mutex poisoned")
            .as_ref()
            .map(CheckoutSession::current_step)
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=aishaura=trace` - Trace the storefront crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,aishaura=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::{Arc, Mutex};

    use aishaura_core::cart::Cart;
    use aishaura_core::catalog::Catalog;
    use aishaura_core::checkout::CheckoutStep;
    use aishaura_core::money::Money;
    use aishaura_core::types::{OrderReceipt, ProductRecord};
    use aishaura_core::upi::PaymentRequest;

    use crate::state::{CartTotals, StoreConfig};
    use crate::view::{Notification, OrderSummary, StorefrontView};
    use crate::Storefront;

    /// View fake that records every call as a readable event string.
    #[derive(Debug, Default)]
    pub struct RecordingView {
        pub events: Mutex<Vec<String>>,
        /// Pretend a QR capability is attached.
        pub qr_available: bool,
    }

    impl RecordingView {
        pub fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }

        pub fn saw(&self, needle: &str) -> bool {
            self.events().iter().any(|e| e.contains(needle))
        }

        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }
    }

    impl StorefrontView for RecordingView {
        fn render_cart(&self, cart: &Cart, _totals: &CartTotals) {
            self.push(format!("cart:{}", cart.item_count()));
        }

        fn render_checkout_step(&self, step: CheckoutStep, summary: &OrderSummary) {
            self.push(format!("step:{}:total={}", step.number(), summary.total));
        }

        fn render_payment_code(&self, request: &PaymentRequest) -> bool {
            self.push(format!("qr:{}", request.uri));
            self.qr_available
        }

        fn render_payment_fallback(&self, request: &PaymentRequest) {
            self.push(format!("qr-fallback:{}:{}", request.payee_id, request.amount));
        }

        fn render_confirmation(&self, receipt: &OrderReceipt) {
            self.push(format!("confirmed:#{}:{}", receipt.order_id, receipt.amount));
        }

        fn close_checkout(&self) {
            self.push("close-checkout".to_string());
        }

        fn set_submit_enabled(&self, enabled: bool) {
            self.push(format!("submit-enabled:{enabled}"));
        }

        fn notify(&self, notification: &Notification) {
            self.push(format!(
                "notify:{:?}:{}",
                notification.kind, notification.title
            ));
        }
    }

    /// A catalog product with sensible defaults.
    pub fn product(name: &str, price_rupees: i64, stock: i64) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            description: None,
            image: None,
            price: Money::from_rupees(price_rupees),
            original_price: None,
            quantity_available: stock,
            rating: 0.0,
            reviews: 0,
            customer_reviews: Vec::new(),
            storage: None,
            shelf_life: None,
            harvest_date: None,
        }
    }

    /// Minimal canned HTTP endpoint: reads each request fully (headers
    /// plus Content-Length body), answers with the given status/body, and
    /// keeps serving until the test ends.
    pub fn spawn_endpoint(status: &'static str, body: &'static str) -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };

                let mut request = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    match stream.read(&mut buf) {
                        Ok(0) | Err(_) => break,
                        Ok(n) => {
                            request.extend_from_slice(&buf[..n]);
                            if request_complete(&request) {
                                break;
                            }
                        }
                    }
                }

                let response = format!(
                    "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                     Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        format!("http://{addr}/exec")
    }

    fn request_complete(request: &[u8]) -> bool {
        let Some(end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&request[..end]);
        let content_length = headers
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        request.len() >= end + 4 + content_length
    }

    /// A storefront wired to a recording view, a throwaway data dir, and
    /// a seeded two-product catalog. Endpoints point nowhere routable;
    /// tests that need a live endpoint override `config.sheets` first.
    pub fn storefront_with(
        tag: &str,
        configure: impl FnOnce(&mut StoreConfig),
    ) -> (Storefront, Arc<RecordingView>) {
        let dir = std::env::temp_dir().join(format!(
            "aishaura-shell-test-{tag}-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);

        let mut config = StoreConfig {
            data_dir: Some(dir),
            cart_clear_delay: std::time::Duration::ZERO,
            ..StoreConfig::default()
        };
        config.sheets.products_api_base = "http://127.0.0.1:1/unroutable".to_string();
        config.sheets.reviews_url = "http://127.0.0.1:1/unroutable".to_string();
        config.sheets.orders_url = "http://127.0.0.1:1/unroutable".to_string();
        configure(&mut config);

        let view = Arc::new(RecordingView::default());
        let storefront = Storefront::new(config, view.clone()).unwrap();
        storefront.catalog.replace(Catalog::new(vec![
            product("Sunflower", 100, 20),
            product("Radish", 80, 10),
        ]));

        (storefront, view)
    }
}
