//! Broadcasting attribute reads over a list of complex numbers.
//!
//! Run with: cargo run --example complex

use std::fmt;

use ilist::{impl_attributes, Abs, Callbacks, IList, IListResult};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Complex {
    re: f64,
    im: f64,
}

impl Complex {
    fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    fn conjugate(&self) -> Self {
        Self::new(self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}{:+}i)", self.re, self.im)
    }
}

impl_attributes!(Complex => f64 { real: |c| c.re, imag: |c| c.im });

impl Abs for Complex {
    type Output = f64;

    fn abs(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

fn main() -> IListResult<()> {
    let callbacks = Callbacks::new()
        .on_append(|list: &IList<Complex>, x: &Complex| println!("Adding {} to {}.", x, list))
        .on_remove(|list: &IList<Complex>, x: &Complex| println!("Removing {} from {}.", x, list));

    let mut l = IList::with_callbacks([Complex::new(3.0, 4.0), Complex::new(6.0, 0.0)], callbacks);

    println!("l          = {}", l);
    println!("l.real     = {}", l.get_attribute("real")?);
    println!("l.imag     = {}", l.get_attribute("imag")?);
    println!("conjugates = {}", l.map(Complex::conjugate));
    println!("abs(l)     = {}", l.abs());

    l.append(Complex::new(0.0, -1.0));
    l.remove(&Complex::new(6.0, 0.0))?;
    println!("l.real     = {}", l.get_attribute("real")?);

    match l.get_attribute("phase") {
        Ok(values) => println!("l.phase    = {}", values),
        Err(e) => println!("l.phase    -> {}", e),
    }

    Ok(())
}
