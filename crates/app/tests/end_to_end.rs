//! End-to-end flows through the use cases and the in-memory repositories.

use std::sync::Arc;

use testresult::TestResult;

use shop::{
    customers::CustomerId,
    fixtures::{euros, test_product},
    products::{Product, ProductId},
};
use shop_app::{
    context::AppContext,
    domain::{
        carts::{CartsServiceError, InMemoryCartRepository},
        products::{InMemoryProductRepository, ProductRepository, ProductsServiceError},
    },
};

struct Shop {
    context: AppContext,
    p1: Product,
    p2: Product,
}

async fn shop() -> TestResult<Shop> {
    let products = Arc::new(InMemoryProductRepository::new());
    let p1 = test_product(euros(19, 99), 10);
    let p2 = test_product(euros(25, 99), 3);

    products.save(p1.clone()).await?;
    products.save(p2.clone()).await?;

    let context =
        AppContext::from_repositories(products, Arc::new(InMemoryCartRepository::new()));

    Ok(Shop { context, p1, p2 })
}

#[tokio::test]
async fn stock_limit_is_enforced_across_requests() -> TestResult {
    let Shop { context, p1, p2 } = shop().await?;
    let customer = CustomerId::new(61_157)?;

    context
        .add_to_cart
        .add_to_cart(customer, p1.id().clone(), 3)
        .await?;

    context
        .add_to_cart
        .add_to_cart(customer, p2.id().clone(), 3)
        .await?;

    let result = context
        .add_to_cart
        .add_to_cart(customer, p2.id().clone(), 1)
        .await;

    assert!(
        matches!(result, Err(CartsServiceError::StockExceeded(3))),
        "expected StockExceeded(3), got {result:?}"
    );

    context
        .add_to_cart
        .add_to_cart(customer, p1.id().clone(), 1)
        .await?;

    let cart = context.get_cart.get_cart(customer).await?;

    assert_eq!(cart.number_of_items(), 7);
    assert_eq!(cart.sub_total()?, Some(euros(157, 93)));

    let quantities: Vec<(ProductId, u32)> = cart
        .line_items()
        .iter()
        .map(|item| (item.product().id().clone(), item.quantity()))
        .collect();

    assert_eq!(
        quantities,
        vec![(p1.id().clone(), 4), (p2.id().clone(), 3)]
    );

    Ok(())
}

#[tokio::test]
async fn failed_first_add_leaves_no_cart_behind() -> TestResult {
    let Shop { context, p2, .. } = shop().await?;
    let customer = CustomerId::new(1)?;

    let result = context
        .add_to_cart
        .add_to_cart(customer, p2.id().clone(), 4)
        .await;

    assert!(
        matches!(result, Err(CartsServiceError::StockExceeded(3))),
        "expected StockExceeded(3), got {result:?}"
    );

    let cart = context.get_cart.get_cart(customer).await?;

    assert!(cart.line_items().is_empty());
    assert_eq!(cart.sub_total()?, None);

    Ok(())
}

#[tokio::test]
async fn emptying_a_cart_removes_its_items() -> TestResult {
    let Shop { context, p1, .. } = shop().await?;
    let customer = CustomerId::new(2)?;

    context
        .add_to_cart
        .add_to_cart(customer, p1.id().clone(), 5)
        .await?;

    context.empty_cart.empty_cart(customer).await?;

    assert_eq!(context.get_cart.get_cart(customer).await?.number_of_items(), 0);

    // A cart emptied once can be emptied again.
    context.empty_cart.empty_cart(customer).await?;

    Ok(())
}

#[tokio::test]
async fn carts_are_isolated_per_customer() -> TestResult {
    let Shop { context, p1, .. } = shop().await?;

    context
        .add_to_cart
        .add_to_cart(CustomerId::new(1)?, p1.id().clone(), 2)
        .await?;

    let other = context.get_cart.get_cart(CustomerId::new(2)?).await?;

    assert!(other.line_items().is_empty());

    Ok(())
}

#[tokio::test]
async fn unknown_product_cannot_be_added() -> TestResult {
    let Shop { context, .. } = shop().await?;

    let result = context
        .add_to_cart
        .add_to_cart(CustomerId::new(1)?, ProductId::random(), 1)
        .await;

    assert!(
        matches!(result, Err(CartsServiceError::ProductNotFound)),
        "expected ProductNotFound, got {result:?}"
    );

    Ok(())
}

#[tokio::test]
async fn demo_catalogue_search() -> TestResult {
    let context = AppContext::in_memory(true);

    let names: Vec<String> = context
        .find_products
        .find_by_name_or_description("monitor")
        .await?
        .iter()
        .map(|product| product.name().to_string())
        .collect();

    assert_eq!(names, vec!["27-Inch Computer Monitor", "Dual Monitor Desk Mount"]);

    let result = context.find_products.find_by_name_or_description("m").await;

    assert!(
        matches!(result, Err(ProductsServiceError::InvalidArgument(_))),
        "expected InvalidArgument, got {result:?}"
    );

    Ok(())
}
