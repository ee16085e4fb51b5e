//! Deterministic demo prizes.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use super::{Company, Prize, PrizeStatus};

const ITEMS: [(&str, &str); 8] = [
    ("Coffee voucher", "vouchers"),
    ("Cinema tickets", "experiences"),
    ("Wireless earbuds", "electronics"),
    ("Extra day off", "time-off"),
    ("Spa session", "experiences"),
    ("Bookstore gift card", "vouchers"),
    ("Mechanical keyboard", "electronics"),
    ("Team lunch", "experiences"),
];

const COMPANIES: [&str; 3] = ["Acme Corp", "Globex", "Initech"];

const PEOPLE: [&str; 5] = ["Ana Torres", "Bruno Díaz", "Carla Méndez", "Diego Ruiz", "Elena Soto"];

fn seed_epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Build `count` prizes. The same count always yields the same prizes.
pub fn demo_prizes(count: usize) -> Vec<Prize> {
    let epoch = seed_epoch();
    (0..count)
        .map(|i| {
            let (item, category) = ITEMS[i % ITEMS.len()];
            let company = (i % 4 != 3).then(|| {
                let index = i % COMPANIES.len();
                Company {
                    id: Uuid::from_u128(0xC0_0000 + index as u128),
                    name: COMPANIES[index].to_string(),
                }
            });
            let stock = ((i * 7) % 23) as u32;
            let status = match i % 11 {
                0 => PrizeStatus::Archived,
                _ if stock == 0 => PrizeStatus::OutOfStock,
                _ => PrizeStatus::Active,
            };

            Prize {
                id: Uuid::from_u128(0x5052_0000_0000 + i as u128),
                name: format!("{item} #{}", i + 1),
                category: category.to_string(),
                status,
                cost_coins: 50 + ((i * 37) % 20) as u32 * 25,
                stock,
                company,
                created_by: PEOPLE[i % PEOPLE.len()].to_string(),
                url: (i % 3 == 0).then(|| format!("https://rewards.example.com/prizes/{}", i + 1)),
                created_at: epoch - Duration::hours(i as i64 * 13),
            }
        })
        .collect()
}
