//! Bar statistics aggregator.
//!
//! Read-only. Day and month windows are UTC calendar periods.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use sea_orm::DatabaseConnection;
use std::collections::HashMap;

use crate::server::{
    data::{menu_item::MenuItemRepository, stats::StatsRepository},
    error::AppError,
    model::stats::{BarStats, RecentOrder, TopItem},
};

const TOP_ITEMS_LIMIT: usize = 5;
const RECENT_ORDERS_LIMIT: u64 = 5;

pub struct StatsService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatsService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get(&self) -> Result<BarStats, AppError> {
        self.get_at(Utc::now()).await
    }

    /// Computes bar statistics relative to `now`.
    ///
    /// - `today_revenue` - sum of order totals placed on the current UTC day
    /// - `monthly_orders` - number of orders placed in the current UTC month
    /// - `top_items` - five best sellers by total quantity, ties broken by name
    /// - `recent_orders` - five most recently placed orders
    pub async fn get_at(&self, now: DateTime<Utc>) -> Result<BarStats, AppError> {
        let repo = StatsRepository::new(self.db);

        let (day_start, day_end) = day_window(now.date_naive());
        let (month_start, month_end) = month_window(now.date_naive());

        let today_revenue = repo.revenue_between(day_start, day_end).await?;
        let monthly_orders = repo.orders_between(month_start, month_end).await?;

        let quantities = repo.quantity_by_menu_item().await?;
        let names: HashMap<i32, String> = MenuItemRepository::new(self.db)
            .find_by_ids(quantities.iter().map(|(id, _)| *id).collect())
            .await?
            .into_iter()
            .map(|item| (item.id, item.name))
            .collect();

        let mut top_items: Vec<TopItem> = quantities
            .into_iter()
            .filter_map(|(id, quantity)| {
                names.get(&id).map(|name| TopItem {
                    name: name.clone(),
                    quantity,
                })
            })
            .collect();
        top_items.sort_by(|a, b| b.quantity.cmp(&a.quantity).then_with(|| a.name.cmp(&b.name)));
        top_items.truncate(TOP_ITEMS_LIMIT);

        let recent_orders = repo
            .recent_orders(RECENT_ORDERS_LIMIT)
            .await?
            .into_iter()
            .map(|order| RecentOrder {
                id: order.id,
                total: order.total,
                date: order.created_at,
            })
            .collect();

        Ok(BarStats {
            today_revenue,
            monthly_orders,
            top_item: top_items.first().map(|item| item.name.clone()),
            top_items,
            recent_orders,
        })
    }
}

fn start_of(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// `[midnight, next midnight)` of the given day.
fn day_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let start = start_of(date);

    (start, start + Duration::days(1))
}

/// `[first day of month, first day of next month)`, rolling December into January.
fn month_window(date: NaiveDate) -> (DateTime<Utc>, DateTime<Utc>) {
    let first = date.with_day(1).unwrap_or(date);
    let next = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    }
    .unwrap_or(NaiveDate::MAX);

    (start_of(first), start_of(next))
}
