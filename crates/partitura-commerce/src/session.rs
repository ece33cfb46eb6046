//! Session-scoped storefront state.
//!
//! One `Session` per user session, owned by the caller (an HTTP handler map,
//! a UI shell). It bundles the per-user cart and favorites and pushes cart
//! changes to listeners directly instead of having views poll for them.

use crate::cart::{Cart, CartEvent};
use crate::catalog::Score;
use crate::favorites::Favorites;
use crate::ids::{ScoreId, SessionId, UserId};
use std::fmt;
use tracing::debug;

type CartListener = Box<dyn Fn(&CartEvent)>;

/// A single user's storefront session.
///
/// Deliberately not `Clone` or `Serialize`: a session is a live, single-owner
/// context with attached listeners, not a value to copy around. Access is
/// single-consumer; wrap it in a mutex or an actor if it must cross threads.
pub struct Session {
    /// Unique session identifier.
    pub id: SessionId,
    /// The authenticated user, if any.
    pub user_id: Option<UserId>,
    cart: Cart,
    favorites: Favorites,
    listeners: Vec<CartListener>,
}

impl Session {
    /// Create an anonymous session with an empty cart.
    pub fn new() -> Self {
        Self {
            id: SessionId::generate(),
            user_id: None,
            cart: Cart::new(),
            favorites: Favorites::new(),
            listeners: Vec::new(),
        }
    }

    /// Create a session for an authenticated user.
    pub fn for_user(user_id: UserId) -> Self {
        let mut session = Self::new();
        session.user_id = Some(user_id);
        session
    }

    /// Register a listener for cart changes. A storefront shell uses this to
    /// open the cart drawer whenever an item is added.
    pub fn on_cart_event(&mut self, listener: impl Fn(&CartEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn emit(&self, event: &CartEvent) {
        for listener in &self.listeners {
            listener(event);
        }
    }

    /// Read access to the cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Read access to the favorites.
    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    /// Mutable access to the favorites.
    pub fn favorites_mut(&mut self) -> &mut Favorites {
        &mut self.favorites
    }

    /// Add one unit of a score to the cart and notify listeners.
    pub fn add_to_cart(&mut self, score: &Score) {
        let event = self.cart.add(score);
        self.emit(&event);
    }

    /// Remove a cart line and notify listeners. No-op when absent.
    pub fn remove_from_cart(&mut self, score_id: &ScoreId) {
        if self.cart.remove(score_id) {
            self.emit(&CartEvent::ItemRemoved {
                score_id: score_id.clone(),
            });
        }
    }

    /// Set a cart line's quantity and notify listeners. A non-positive
    /// quantity removes the line.
    pub fn set_cart_quantity(&mut self, score_id: &ScoreId, quantity: i64) {
        if !self.cart.set_quantity(score_id, quantity) {
            return;
        }
        let event = if quantity <= 0 {
            CartEvent::ItemRemoved {
                score_id: score_id.clone(),
            }
        } else {
            CartEvent::QuantityChanged {
                score_id: score_id.clone(),
                quantity: self
                    .cart
                    .line(score_id)
                    .map(|l| l.quantity)
                    .unwrap_or(quantity),
            }
        };
        self.emit(&event);
    }

    /// Empty the cart and notify listeners.
    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.emit(&CartEvent::Cleared);
        debug!(session_id = %self.id, "session cart cleared");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("user_id", &self.user_id)
            .field("cart", &self.cart)
            .field("favorites", &self.favorites)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
