use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use anyhow::Context;
use rentora_catalog::{category, Listing, ListingFilter, NewListing, CATEGORIES};
use rentora_store::ListingStore;

use crate::cli::{AddArgs, ListArgs};
use crate::state::AppState;

fn summary_line(listing: &Listing) -> String {
    format!(
        "#{:<5} {}  · {} · {}  ₹{}/hr  ₹{}/day  ★{:.1}",
        listing.id,
        listing.title,
        category::display_name(&listing.category),
        listing.location,
        listing.price_hourly,
        listing.price_daily,
        listing.rating,
    )
}

fn print_listings<W: Write>(out: &mut W, listings: &[&Listing], json: bool) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, listings)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{} spaces", listings.len())?;
    for listing in listings {
        writeln!(out, "{}", summary_line(listing))?;
    }
    Ok(())
}

pub fn list<W: Write>(state: &AppState, args: &ListArgs, json: bool, out: &mut W) -> anyhow::Result<()> {
    let filter = ListingFilter {
        category: args.category.clone(),
        location: args.location.clone(),
        price_band: args.price,
    };
    let all = state.store.all_listings();
    print_listings(out, &filter.apply(&all), json)
}

pub fn categories<W: Write>(json: bool, out: &mut W) -> anyhow::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &CATEGORIES)?;
        writeln!(out)?;
        return Ok(());
    }
    for c in CATEGORIES.iter() {
        writeln!(out, "{:<14} {}", c.id, c.label)?;
    }
    Ok(())
}

pub fn show<W: Write>(state: &AppState, id: u32, json: bool, out: &mut W) -> anyhow::Result<()> {
    let listing = state
        .store
        .listing(id)
        .with_context(|| format!("Listing not found: {}", id))?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{}", listing.title)?;
    writeln!(
        out,
        "{} · {} · hosted by {}",
        category::display_name(&listing.category),
        listing.location,
        listing.host
    )?;
    writeln!(out, "₹{}/hour  ₹{}/day  ★{:.1}", listing.price_hourly, listing.price_daily, listing.rating)?;
    writeln!(out)?;
    writeln!(out, "{}", listing.description)?;
    if !listing.amenities.is_empty() {
        writeln!(out, "Amenities: {}", listing.amenities.join(", "))?;
    }
    writeln!(out, "Location: {:.4}, {:.4}", listing.coordinates.lat, listing.coordinates.lng)?;
    for review in &listing.reviews {
        writeln!(out, "  \"{}\" ({}, {})", review.comment, review.name, review.date)?;
    }
    Ok(())
}

/// Watches the store the way a browse view would and remembers the latest
/// catalog size.
fn watch_catalog_size(store: &Arc<ListingStore>) -> (rentora_store::Subscription, Arc<AtomicUsize>) {
    let size = Arc::new(AtomicUsize::new(store.all_listings().len()));
    let reader: Weak<ListingStore> = Arc::downgrade(store);
    let seen = size.clone();

    let subscription = store.subscribe(move |_| {
        if let Some(store) = reader.upgrade() {
            seen.store(store.all_listings().len(), Ordering::SeqCst);
        }
    });
    (subscription, size)
}

pub fn add<W: Write>(state: &AppState, args: AddArgs, json: bool, out: &mut W) -> anyhow::Result<()> {
    let draft = NewListing {
        title: args.title,
        location: args.location,
        category: args.category,
        price_hourly: args.hourly,
        price_daily: args.daily,
        description: args.description,
        image: args.image,
        host: args.host,
        amenities: (!args.amenities.is_empty()).then_some(args.amenities),
        coordinates: None,
    };

    let (subscription, catalog_size) = watch_catalog_size(&state.store);
    let listing = state
        .store
        .add_listing(draft)
        .context("Your listing was not saved")?;
    subscription.unsubscribe();

    if json {
        serde_json::to_writer_pretty(&mut *out, &listing)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Listed: {}", summary_line(&listing))?;
    writeln!(
        out,
        "The catalog now has {} spaces.",
        catalog_size.load(Ordering::SeqCst)
    )?;
    Ok(())
}

pub fn mine<W: Write>(state: &AppState, json: bool, out: &mut W) -> anyhow::Result<()> {
    let user = state.store.user_listings();
    let refs: Vec<&Listing> = user.iter().collect();
    print_listings(out, &refs, json)
}
