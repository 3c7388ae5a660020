/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Entities carrying a monetary amount that aggregations can sum.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of an iterator of entities.
pub fn sum_amounts<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
