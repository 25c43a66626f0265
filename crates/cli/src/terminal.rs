//! Terminal presenter: prints cart state and asks questions on stdin/stdout.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use storefront_cart::{CartView, Presenter};
use storefront_catalog::Product;
use storefront_core::format_money;

/// Line-oriented terminal.
///
/// While the cart panel is open (after the `cart` command) renders list every
/// line; otherwise a render prints only the item count badge.
pub struct Terminal<R, W> {
    input: R,
    output: W,
    cart_open: bool,
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            cart_open: false,
        }
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    /// Toggle the cart panel; returns whether it is now open.
    pub fn toggle_cart(&mut self) -> bool {
        self.cart_open = !self.cart_open;
        self.cart_open
    }

    /// Print the prompt and read one trimmed line. `None` at end of input.
    pub fn read_command(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "> ")?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn show_products(&mut self, products: &[&Product]) {
        if products.is_empty() {
            self.line("No products found matching your search.");
            return;
        }
        for product in products {
            self.line(format_args!(
                "{:>3}  {} {}  [{}] by {}  {}  ★ {} ({} reviews)",
                product.id(),
                product.glyph(),
                product.name(),
                product.category(),
                product.seller(),
                format_money(product.price()),
                product.rating(),
                product.review_count(),
            ));
            if !product.description().is_empty() {
                self.line(format_args!("       {}", product.description()));
            }
        }
    }

    pub fn line(&mut self, text: impl Display) {
        if let Err(e) = writeln!(self.output, "{text}") {
            tracing::warn!(error = %e, "failed to write to terminal");
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn flush(&mut self) {
        if let Err(e) = self.output.flush() {
            tracing::warn!(error = %e, "failed to flush terminal");
        }
    }
}

impl<R: BufRead, W: Write> Presenter for Terminal<R, W> {
    fn render(&mut self, view: &CartView<'_>) {
        if !self.cart_open {
            self.line(format_args!("🛒 {}", view.item_count));
            return;
        }

        self.line("---- Cart ----");
        if view.is_empty() {
            self.line("Your cart is empty");
        }
        for item in view.lines {
            self.line(format_args!(
                "{:>3}  {}  x{}  {}",
                item.product_id(),
                item.name(),
                item.quantity(),
                format_money(item.line_total()),
            ));
        }
        self.line(format_args!("Total: {}", view.formatted_total()));
    }

    fn notify(&mut self, message: &str) {
        self.line(format_args!("* {message}"));
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        if let Err(e) = write!(self.output, "{prompt} [y/N] ") {
            tracing::warn!(error = %e, "failed to write prompt");
        }
        self.flush();
        match self.read_line() {
            Ok(Some(answer)) => matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"),
            Ok(None) => false,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read confirmation; treating as no");
                false
            }
        }
    }

    fn acknowledge(&mut self, message: &str) {
        self.line("");
        self.line(message);
        if let Err(e) = write!(self.output, "[press Enter] ") {
            tracing::warn!(error = %e, "failed to write prompt");
        }
        self.flush();
        if let Err(e) = self.read_line() {
            tracing::warn!(error = %e, "failed to read acknowledgment");
        }
    }

    fn close_cart(&mut self) {
        self.cart_open = false;
    }
}
