// ============================================================================
// Basic Usage Example
// ============================================================================

use fixed_money::money::Money;
use fixed_money::prelude::*;
use fixed_money::registry::tags;

fn main() -> Result<(), MoneyError> {
    println!("=== Fixed Money Example ===\n");

    // Typed construction: the Usd alias carries the registry default of
    // two decimal places in the type.
    let unit_price = Usd::from_minor(1_099); // 10.99 USD
    let quantity = 3;
    let line_total = unit_price * quantity;
    let discount = Usd::from_f64(2.50)?;

    println!("Unit price:  {}", unit_price);
    println!("Quantity:    {}", quantity);
    println!("Line total:  {}", line_total);
    println!("Discount:    {}", discount);
    println!("To pay:      {}\n", line_total - discount);

    // Registry lookups work from an identifier, a type witness, or a value.
    println!("USD decimals:      {}", decimals(CurrencyId::Usd));
    println!("USD description:   {}", description(line_total));
    println!("EUR short symbol:  {}", short_symbol(CurrencyId::Eur));
    println!("JPY major unit:    {} minor units", Jpy::one().unwrap().minor_units());
    println!("btc alpha code:    {}\n", alpha_code(CurrencyId::Btc));

    // Currencies without a sane minor unit demand an explicit scale.
    match MoneySpec::new(CurrencyId::Xau).fill() {
        Err(error) => println!("XAU without scale: {}", error),
        Ok(_) => unreachable!("the registry reports no minor unit for XAU"),
    }
    let gold = Money::<tags::Xau, 3>::from_f64(1.5)?;
    println!("XAU at scale 3:    {:?}\n", gold);

    // Runtime descriptors resolve against the registry.
    let spec = MoneySpec::new(CurrencyId::Jpy).fill()?;
    println!(
        "JPY spec: scale {} storage {:?}, 500 yen = {} minor units",
        spec.scale,
        spec.storage,
        spec.minor_units_from_decimal(rust_decimal::Decimal::from(500))?
    );

    Ok(())
}
