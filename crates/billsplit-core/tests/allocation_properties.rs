//! Property tests for the allocation engine.

use billsplit_core::{
    add_order, allocate, compute_grand_total, compute_subtotal, AllocationResult, BillParameters,
    Decimal, Money, Order, TipRate, MAX_AMOUNT, MAX_PARTICIPANTS, MAX_TIP_PERCENT,
};
use proptest::prelude::*;

/// Amounts in cents, mostly everyday values but reaching the input bound.
fn amount_cents() -> impl Strategy<Value = i64> {
    prop_oneof![0i64..100_000, 0i64..=MAX_AMOUNT.cents()]
}

/// Tip in basis points, including fractions of a cent and the 1000% cap.
fn tip_bps() -> impl Strategy<Value = u32> {
    prop_oneof![0u32..5_000, 0u32..=MAX_TIP_PERCENT * 100]
}

fn friend_count() -> impl Strategy<Value = usize> {
    prop_oneof![1usize..=12, 1usize..=MAX_PARTICIPANTS]
}

fn bill_strategy() -> impl Strategy<Value = BillParameters> {
    (amount_cents(), tip_bps(), amount_cents(), friend_count()).prop_map(
        |(total, tip, tax, friends)| {
            BillParameters::new(
                Money::from_cents(total),
                TipRate::from_bps(tip),
                Money::from_cents(tax),
                friends,
            )
        },
    )
}

/// Bill plus orders where every order belongs to an existing friend.
fn assigned_case() -> impl Strategy<Value = (BillParameters, Vec<Order>)> {
    bill_strategy().prop_flat_map(|bill| {
        let cost = prop_oneof![1i64..50_000, 1i64..=MAX_AMOUNT.cents()];
        let order = (cost, 0..bill.participant_count)
            .prop_map(|(cost, person)| Order::new("item", Money::from_cents(cost), person));
        (Just(bill), prop::collection::vec(order, 1..30))
    })
}

fn allocated(result: &AllocationResult) -> Decimal {
    result
        .totals()
        .map(|totals| totals.iter().map(Money::to_decimal).sum::<Decimal>())
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn shares_sum_to_grand_total((bill, orders) in assigned_case()) {
        let result = allocate(&orders, &bill);
        let totals = result.totals().expect("at least one friend");
        prop_assert_eq!(totals.len(), bill.participant_count);

        // each share is rounded once, by at most half a cent
        let drift = (allocated(&result) - compute_grand_total(&bill)).abs();
        let limit = Decimal::new(bill.participant_count as i64, 2) / Decimal::from(2);
        prop_assert!(drift <= limit, "drift {} over {}", drift, limit);
    }

    #[test]
    fn shares_are_non_negative((bill, orders) in assigned_case()) {
        let result = allocate(&orders, &bill);
        for total in result.totals().unwrap() {
            prop_assert!(!total.is_negative(), "negative share {}", total);
        }
    }

    #[test]
    fn no_orders_means_zero_for_everyone(bill in bill_strategy()) {
        let result = allocate(&[], &bill);
        let totals = result.totals().unwrap();
        prop_assert_eq!(totals.len(), bill.participant_count);
        prop_assert!(totals.iter().all(Money::is_zero));
    }

    #[test]
    fn friend_without_orders_owes_nothing((bill, orders) in assigned_case()) {
        let result = allocate(&orders, &bill);
        for (person, total) in result.totals().unwrap().iter().enumerate() {
            if orders.iter().all(|order| order.person != person) {
                prop_assert!(total.is_zero());
            }
        }
    }

    #[test]
    fn allocation_is_deterministic((bill, orders) in assigned_case()) {
        prop_assert_eq!(allocate(&orders, &bill), allocate(&orders, &bill));
    }

    #[test]
    fn too_many_friends_is_invalid(friends in (MAX_PARTICIPANTS + 1)..=usize::MAX) {
        let bill = BillParameters::from_raw("10", "10", "1", friends);
        prop_assert!(!allocate(&[], &bill).is_valid());
    }

    #[test]
    fn raw_input_never_fails(
        total in "\\PC*|-?[0-9]{0,30}(\\.[0-9]{0,30})?",
        tip in "\\PC*|-?[0-9]{0,30}(\\.[0-9]{0,30})?",
        tax in "\\PC*|-?[0-9]{0,30}(\\.[0-9]{0,30})?",
        costs in prop::collection::vec("-?[0-9]{0,30}(\\.[0-9]{0,4})?", 0..10),
    ) {
        let bill = BillParameters::from_raw(&total, &tip, &tax, 3);
        prop_assert!(compute_grand_total(&bill) >= Decimal::ZERO);

        let orders: Vec<Order> = costs
            .iter()
            .enumerate()
            .filter_map(|(index, cost)| add_order("item", cost, index % 3).ok())
            .collect();
        prop_assert!(orders.iter().all(|order| order.cost <= MAX_AMOUNT));
        prop_assert!(allocate(&orders, &bill).is_valid());
    }
}

#[test]
fn out_of_range_order_is_charged_to_nobody() {
    let orders = vec![Order::new("Soup", Money::from_cents(1000), 5)];
    let bill = BillParameters::from_raw("10", "0", "0", 2);

    assert_eq!(compute_subtotal(&orders), Decimal::from(10));
    assert_eq!(compute_grand_total(&bill), Decimal::from(10));
    assert_eq!(allocate(&orders, &bill).formatted().unwrap(), vec!["0.00", "0.00"]);
}

#[test]
fn largest_orders_at_every_limit_split_cleanly() {
    let cost = MAX_AMOUNT.to_plain_string();
    let orders: Vec<Order> = (0..MAX_PARTICIPANTS)
        .map(|person| add_order("item", &cost, person).unwrap())
        .collect();
    let bill = BillParameters::from_raw(&cost, "1000", &cost, MAX_PARTICIPANTS);

    let result = allocate(&orders, &bill);
    let totals = result.totals().unwrap();
    assert_eq!(totals.len(), MAX_PARTICIPANTS);
    assert!(totals.iter().all(|total| *total == totals[0]));
}
