use unicode_data::{BuiltinDatabase, CharacterDatabase, Generator};

// Count how many code points have names in the built-in database, and
// how many of those make it into the table.
//
// The difference is the named code points below SPACE and the ones in
// a `C*` general category (e.g. SOFT HYPHEN, which is a format
// character).

fn main() {
    let db = BuiltinDatabase::new();
    let named = (0u32..=0x10FFFF).filter(|&cp| db.name(cp).is_some()).count();

    let (table, skipped) = Generator::new(db).generate_with_counts();

    println!("there are {} named code points", named);
    println!("{} of them are in the table", table.len());
    println!(
        "skipped {} surrogates, {} by category, {} without a name",
        skipped.surrogate, skipped.category, skipped.unnamed
    );
}
