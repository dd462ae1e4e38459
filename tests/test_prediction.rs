//! End-to-end tests of the prediction flow: form-shaped inputs through
//! the preprocessor into both classifiers.

use rand::prelude::*;
use rand::SeedableRng;

use churnscope::model::{
    Classifier, Contract, CustomerProfile, InternetService, PaymentMethod, Transformer,
    MONTHLY_CHARGES_MAX, TENURE_MAX,
};

#[path = "common/mod.rs"]
mod common;

#[test]
fn test_example_scenario() {
    // tenure=12, charges=70, Month-to-month, Electronic check, Fiber optic
    let (_temp_dir, store) = common::store_fixture();
    let profile = CustomerProfile {
        tenure: 12,
        monthly_charges: 70.0,
        contract: Contract::MonthToMonth,
        payment_method: PaymentMethod::ElectronicCheck,
        internet_service: InternetService::FiberOptic,
    };

    let outcome = store.predict(&profile).unwrap();

    assert!((0.0..=1.0).contains(&outcome.logistic));
    assert!((0.0..=1.0).contains(&outcome.forest));
}

#[test]
fn test_transform_length_matches_what_models_expect() {
    let (_temp_dir, store) = common::store_fixture();
    let features = store
        .preprocessor
        .transform(&CustomerProfile::default())
        .unwrap();

    for model in store.classifiers() {
        assert_eq!(
            features.len(),
            model.feature_names().len(),
            "{} expects a different vector length",
            model.label()
        );
    }
}

#[test]
fn test_slider_extremes_transform_without_raising() {
    let (_temp_dir, store) = common::store_fixture();

    for tenure in [0, TENURE_MAX] {
        for monthly_charges in [0, MONTHLY_CHARGES_MAX] {
            let profile = CustomerProfile {
                tenure,
                monthly_charges: f64::from(monthly_charges),
                ..CustomerProfile::default()
            };
            let outcome = store.predict(&profile).unwrap();
            assert!((0.0..=1.0).contains(&outcome.logistic));
            assert!((0.0..=1.0).contains(&outcome.forest));
        }
    }
}

#[test]
fn test_every_categorical_combination_transforms() {
    let (_temp_dir, store) = common::store_fixture();

    for contract in Contract::ALL {
        for payment_method in PaymentMethod::ALL {
            for internet_service in InternetService::ALL {
                let profile = CustomerProfile {
                    contract: *contract,
                    payment_method: *payment_method,
                    internet_service: *internet_service,
                    ..CustomerProfile::default()
                };
                assert!(
                    store.predict(&profile).is_ok(),
                    "{} / {} / {} failed",
                    contract,
                    payment_method,
                    internet_service
                );
            }
        }
    }
}

#[test]
fn test_prediction_is_idempotent() {
    let (_temp_dir, store) = common::store_fixture();
    let profile = CustomerProfile {
        tenure: 40,
        monthly_charges: 110.0,
        contract: Contract::TwoYear,
        payment_method: PaymentMethod::CreditCard,
        internet_service: InternetService::No,
    };

    let first = store.predict(&profile).unwrap();
    let second = store.predict(&profile).unwrap();

    assert_eq!(first, second, "Same input must give same output");
}

#[test]
fn test_both_models_score_the_same_vector() {
    let (_temp_dir, store) = common::store_fixture();
    let features = store
        .preprocessor
        .transform(&CustomerProfile::default())
        .unwrap();

    let from_flow = store.predict(&CustomerProfile::default()).unwrap();
    let logistic = store.logistic.predict_probability(&features).unwrap();
    let forest = store.forest.predict_probability(&features).unwrap();

    assert_eq!(from_flow.logistic, logistic);
    assert_eq!(from_flow.forest, forest);
}

#[test]
fn test_probabilities_bounded_on_random_in_range_profiles() {
    let (_temp_dir, store) = common::store_fixture();
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let profile = CustomerProfile {
            tenure: rng.gen_range(0..=TENURE_MAX),
            monthly_charges: f64::from(rng.gen_range(0..=MONTHLY_CHARGES_MAX)),
            contract: *Contract::ALL.choose(&mut rng).unwrap(),
            payment_method: *PaymentMethod::ALL.choose(&mut rng).unwrap(),
            internet_service: *InternetService::ALL.choose(&mut rng).unwrap(),
        };
        let outcome = store.predict(&profile).unwrap();
        assert!((0.0..=1.0).contains(&outcome.logistic), "{:?}", profile);
        assert!((0.0..=1.0).contains(&outcome.forest), "{:?}", profile);
    }
}
