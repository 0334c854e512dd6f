//! Tracing subscriber installation for the `monkey` binary.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the stderr tracing subscriber.
///
/// Does nothing unless `MONKEY_LOG` or `RUST_LOG` is set, e.g.
/// `MONKEY_LOG=monkey_parse=trace` or `RUST_LOG=monkey_eval=debug`.
/// `MONKEY_LOG` wins when both are set. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};
        use tracing_tree::HierarchicalLayer;

        let Some(directives) = std::env::var("MONKEY_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
        else {
            return;
        };

        let filter = EnvFilter::new(directives);
        let layer = HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_indent_lines(true);

        // Another subscriber may already be installed by an embedding
        // program; keep it.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(layer)
            .try_init();
    });
}
