/// Supplies a presentation-ready label for UI or logs.
pub trait Displayable {
    fn display_label(&self) -> String;
}

/// Entities carrying a single monetary amount.
pub trait Amounted {
    fn amount(&self) -> f64;
}

/// Sums the amounts of any iterator of amounted items.
pub fn total_amount<'a, T, I>(items: I) -> f64
where
    T: Amounted + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items.into_iter().map(Amounted::amount).sum()
}
