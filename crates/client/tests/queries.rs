mod common;

use alloy_primitives::U256;
use splitwise_client::{MoneyRequest, SplitwiseError};

use crate::common::*;

#[tokio::test]
async fn test_get_sent_requests_maps_every_field_in_order() {
    let test = setup();
    let remote = vec![
        money_request(4, test.signer, addr(0x02), 250, false),
        money_request(1, test.signer, addr(0x03), 1_000, true),
        money_request(9, test.signer, addr(0x02), 0, false),
    ];
    push_return(&test.asserter, remote.clone());

    let requests = test.client.get_sent_requests().await.unwrap();

    assert_eq!(requests.len(), remote.len());
    for (local, remote) in requests.iter().zip(remote.iter()) {
        assert_eq!(local.request_id, remote.id);
        assert_eq!(local.from, remote.from);
        assert_eq!(local.to, remote.to);
        assert_eq!(local.amount, remote.amount);
        assert_eq!(local.paid, remote.paid);
    }
}

#[tokio::test]
async fn test_get_received_requests_maps_records() {
    let test = setup();
    push_return(
        &test.asserter,
        vec![
            money_request(2, addr(0x0a), test.signer, 40, false),
            money_request(3, addr(0x0b), test.signer, 60, true),
        ],
    );

    let requests = test.client.get_received_requests().await.unwrap();

    assert_eq!(
        requests,
        vec![
            MoneyRequest {
                request_id: U256::from(2),
                from: addr(0x0a),
                to: test.signer,
                amount: U256::from(40),
                paid: false,
            },
            MoneyRequest {
                request_id: U256::from(3),
                from: addr(0x0b),
                to: test.signer,
                amount: U256::from(60),
                paid: true,
            },
        ]
    );
}

#[tokio::test]
async fn test_get_received_requests_empty() {
    let test = setup();
    push_return(&test.asserter, Vec::<splitwise_client::sol::ISplitwise::MoneyRequest>::new());
    assert!(test.client.get_received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_address_queries_preserve_order() {
    let test = setup();
    push_return(&test.asserter, vec![addr(0x01), addr(0x02), addr(0x03)]);
    push_return(&test.asserter, vec![addr(0x05), addr(0x04)]);
    push_return(&test.asserter, vec![addr(0x06)]);

    assert_eq!(
        test.client.get_participating_addresses().await.unwrap(),
        vec![addr(0x01), addr(0x02), addr(0x03)]
    );
    assert_eq!(test.client.get_all_creditors().await.unwrap(), vec![addr(0x05), addr(0x04)]);
    assert_eq!(test.client.get_all_debtors().await.unwrap(), vec![addr(0x06)]);
}

#[tokio::test]
async fn test_amount_queries() {
    let test = setup();
    let large = U256::from(10).pow(U256::from(30));
    push_return(&test.asserter, U256::from(150));
    push_return(&test.asserter, large);
    push_return(&test.asserter, U256::from(20));
    push_return(&test.asserter, U256::ZERO);

    assert_eq!(test.client.get_total_amount_owed().await.unwrap(), U256::from(150));
    assert_eq!(test.client.get_total_amount_requested().await.unwrap(), large);
    assert_eq!(test.client.get_amount_owed_to(addr(0x0a)).await.unwrap(), U256::from(20));
    assert_eq!(test.client.get_amount_requested_from(addr(0x0b)).await.unwrap(), U256::ZERO);
}

#[tokio::test]
async fn test_remote_failure_propagates() {
    let test = setup();
    test.asserter.push_failure_msg("execution reverted");

    let err = test.client.get_total_amount_owed().await.unwrap_err();
    assert!(matches!(err, SplitwiseError::Contract(_)), "unexpected error: {err}");
    assert!(err.to_string().contains("execution reverted"));
}

#[test]
fn test_client_reports_bound_addresses() {
    let test = setup();
    assert_eq!(test.client.address(), addr(0xc0));
    assert_eq!(test.client.signer(), test.signer);
}
