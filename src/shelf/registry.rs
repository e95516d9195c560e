//! Shelves and the registry that looks them up by number.

use super::product::Product;
use rust_decimal::Decimal;

/// A numbered shelf holding some units of one product.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Shelf {
    number: u32,
    product: Product,
    quantity: u32,
}

impl Shelf {
    pub fn new(number: u32, product: Product, quantity: u32) -> Self {
        Self {
            number,
            product,
            quantity,
        }
    }

    pub fn number(&self) -> u32 {
        self.number
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn name(&self) -> &str {
        self.product.name()
    }

    pub fn price(&self) -> Decimal {
        self.product.price()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn is_available(&self) -> bool {
        self.quantity > 0
    }

    /// Hand out one unit, or `None` when the shelf is empty.
    pub fn release(&mut self) -> Option<Product> {
        if !self.is_available() {
            return None;
        }
        self.quantity -= 1;
        Some(self.product.clone())
    }
}

/// Lookup of shelves by number.
///
/// Shelf numbers are unique within a registry. The machine reads prices and
/// stock through this trait and releases products through `find_mut`.
pub trait ShelfRegistry {
    /// Shelf numbers in display order.
    fn list(&self) -> Vec<u32>;

    fn find(&self, number: u32) -> Option<&Shelf>;

    fn find_mut(&mut self, number: u32) -> Option<&mut Shelf>;
}

/// Ordered, in-memory shelf registry.
///
/// # Example
///
/// ```rust
/// use coinbox::shelf::{Product, Shelf, ShelfRegistry, Shelves};
///
/// let shelves: Shelves = vec![
///     Shelf::new(1, Product::parse("cola drink", "2.44").unwrap(), 1),
///     Shelf::new(2, Product::parse("chocolate bar", "5.99").unwrap(), 0),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(shelves.list(), vec![1, 2]);
/// assert!(shelves.find(1).unwrap().is_available());
/// assert!(!shelves.find(2).unwrap().is_available());
/// assert!(shelves.find(9).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Shelves {
    shelves: Vec<Shelf>,
}

impl Shelves {
    pub fn new(shelves: Vec<Shelf>) -> Self {
        Self { shelves }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shelf> {
        self.shelves.iter()
    }
}

impl FromIterator<Shelf> for Shelves {
    fn from_iter<I: IntoIterator<Item = Shelf>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl ShelfRegistry for Shelves {
    fn list(&self) -> Vec<u32> {
        self.iter().map(Shelf::number).collect()
    }

    fn find(&self, number: u32) -> Option<&Shelf> {
        self.iter().find(|shelf| shelf.number == number)
    }

    fn find_mut(&mut self, number: u32) -> Option<&mut Shelf> {
        self.shelves.iter_mut().find(|shelf| shelf.number == number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product() -> Product {
        Product::new("product", dec!(1.99))
    }

    #[test]
    fn shelf_with_stock_is_available() {
        assert!(Shelf::new(1, product(), 1).is_available());
        assert!(!Shelf::new(1, product(), 0).is_available());
    }

    #[test]
    fn release_decrements_quantity() {
        let mut shelf = Shelf::new(1, product(), 2);

        assert_eq!(shelf.release(), Some(product()));
        assert_eq!(shelf.quantity(), 1);
    }

    #[test]
    fn release_refuses_empty_shelf() {
        let mut shelf = Shelf::new(1, product(), 0);
        assert_eq!(shelf.release(), None);
        assert_eq!(shelf.quantity(), 0);
    }

    #[test]
    fn release_stops_when_stock_runs_out() {
        let mut shelf = Shelf::new(1, product(), 1);

        assert!(shelf.release().is_some());
        assert!(shelf.release().is_none());
        assert!(!shelf.is_available());
    }

    #[test]
    fn registry_finds_by_number() {
        let mut shelves = Shelves::new(vec![
            Shelf::new(3, product(), 1),
            Shelf::new(1, product(), 1),
        ]);

        assert_eq!(shelves.list(), vec![3, 1]);
        assert_eq!(shelves.find(1).map(Shelf::number), Some(1));
        assert!(shelves.find(2).is_none());

        shelves.find_mut(3).and_then(Shelf::release);
        assert_eq!(shelves.find(3).map(Shelf::quantity), Some(0));
    }
}
