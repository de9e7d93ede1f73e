//! Integration tests for `MemoryStore`.

use chrono::{Days, Local, NaiveDate};
use dispensary_core::{
  Error,
  category::NewCategory,
  medicine::{MedicinePatch, NewMedicine},
  store::{InventoryStore, MedicineQuery},
  validate,
};
use uuid::Uuid;

use crate::{MemoryStore, SEED_CATEGORIES};

fn today() -> NaiveDate { Local::now().date_naive() }

fn in_days(days: u64) -> NaiveDate {
  today().checked_add_days(Days::new(days)).unwrap()
}

fn new_medicine(name: &str, category: &str) -> NewMedicine {
  NewMedicine {
    name:           name.into(),
    category:       category.into(),
    dosage:         "500mg".into(),
    manufacturer:   "Acme".into(),
    expiry_date:    in_days(365),
    stock_quantity: 10,
    price:          Some(1.5),
    description:    None,
  }
}

fn query() -> MedicineQuery { MedicineQuery::default() }

fn names(medicines: &[dispensary_core::medicine::Medicine]) -> Vec<&str> {
  medicines.iter().map(|m| m.name.as_str()).collect()
}

// ─── Medicines ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_and_get_medicine() {
  let s = MemoryStore::new();

  let created = s.create_medicine(new_medicine("Aspirin", "painkillers")).await.unwrap();
  assert_eq!(created.created_at, created.updated_at);

  let fetched = s.get_medicine(created.id).await.unwrap();
  assert_eq!(fetched, Some(created));
}

#[tokio::test]
async fn get_missing_medicine_returns_none() {
  let s = MemoryStore::new();
  assert!(s.get_medicine(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_medicine_names_are_allowed() {
  let s = MemoryStore::new();
  let a = s.create_medicine(new_medicine("Aspirin", "painkillers")).await.unwrap();
  let b = s.create_medicine(new_medicine("Aspirin", "painkillers")).await.unwrap();
  assert_ne!(a.id, b.id);
  assert_eq!(s.list_medicines(&query()).await.unwrap().len(), 2);
}

#[tokio::test]
async fn empty_update_leaves_record_untouched() {
  let s = MemoryStore::new();
  let created = s.create_medicine(new_medicine("Aspirin", "painkillers")).await.unwrap();

  let updated = s
    .update_medicine(created.id, MedicinePatch::default())
    .await
    .unwrap()
    .unwrap();
  assert_eq!(updated, created);
}

#[tokio::test]
async fn update_merges_fields_and_bumps_timestamp() {
  let s = MemoryStore::new();
  let created = s.create_medicine(new_medicine("Aspirin", "painkillers")).await.unwrap();

  let patch = MedicinePatch {
    stock_quantity: Some(99),
    price: Some(None),
    ..Default::default()
  };
  let updated = s.update_medicine(created.id, patch).await.unwrap().unwrap();

  assert_eq!(updated.stock_quantity, 99);
  assert_eq!(updated.price, None);
  assert_eq!(updated.name, created.name);
  assert_eq!(updated.dosage, created.dosage);
  assert_eq!(updated.expiry_date, created.expiry_date);
  assert_eq!(updated.created_at, created.created_at);
  assert!(updated.updated_at > created.updated_at);

  let again = s
    .update_medicine(created.id, MedicinePatch {
      stock_quantity: Some(98),
      ..Default::default()
    })
    .await
    .unwrap()
    .unwrap();
  assert!(again.updated_at > updated.updated_at);
}

#[tokio::test]
async fn update_missing_medicine_returns_none() {
  let s = MemoryStore::new();
  let patch = MedicinePatch {
    dosage: Some("1g".into()),
    ..Default::default()
  };
  assert!(s.update_medicine(Uuid::new_v4(), patch).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_medicine_reports_whether_it_existed() {
  let s = MemoryStore::new();
  let created = s.create_medicine(new_medicine("Aspirin", "painkillers")).await.unwrap();

  assert!(s.delete_medicine(created.id).await.unwrap());
  assert!(!s.delete_medicine(created.id).await.unwrap());
  assert!(s.get_medicine(created.id).await.unwrap().is_none());

  let ghost = Uuid::new_v4();
  assert!(!s.delete_medicine(ghost).await.unwrap());
  assert!(!s.delete_medicine(ghost).await.unwrap());
}

// ─── Listing ─────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_is_sorted_by_name() {
  let s = MemoryStore::new();
  for name in ["Zinc", "Aspirin", "Ibuprofen", "Amoxicillin"] {
    s.create_medicine(new_medicine(name, "misc")).await.unwrap();
  }

  let all = s.list_medicines(&query()).await.unwrap();
  assert_eq!(names(&all), ["Amoxicillin", "Aspirin", "Ibuprofen", "Zinc"]);
}

#[tokio::test]
async fn skip_and_limit_window_the_sorted_list() {
  let s = MemoryStore::new();
  for name in ["E", "D", "C", "B", "A"] {
    s.create_medicine(new_medicine(name, "misc")).await.unwrap();
  }
  let all = s.list_medicines(&query()).await.unwrap();

  for skip in 0..=7 {
    let page = s
      .list_medicines(&MedicineQuery { skip, ..query() })
      .await
      .unwrap();
    assert_eq!(page.len(), all.len().saturating_sub(skip));
    assert_eq!(page.as_slice(), &all[skip.min(all.len())..]);
  }

  let window = s
    .list_medicines(&MedicineQuery {
      skip: 1,
      limit: 2,
      ..query()
    })
    .await
    .unwrap();
  assert_eq!(names(&window), ["B", "C"]);
}

#[tokio::test]
async fn vitamins_scenario() {
  let s = MemoryStore::new();
  s.create_category(NewCategory::new("vitamins", None)).await.unwrap();

  let input = dispensary_core::medicine::MedicineInput {
    name:           "vitamin c".into(),
    category:       "Vitamins".into(),
    dosage:         "500mg".into(),
    manufacturer:   "acme".into(),
    expiry_date:    in_days(365),
    stock_quantity: 10,
    price:          None,
    description:    None,
  };
  let created = s
    .create_medicine(validate::medicine(input, today()).unwrap())
    .await
    .unwrap();
  assert_eq!(created.name, "Vitamin C");
  assert_eq!(created.category, "vitamins");
  assert_eq!(created.manufacturer, "Acme");

  let vitamins = s
    .list_medicines(&MedicineQuery {
      category: Some("vitamins".into()),
      ..query()
    })
    .await
    .unwrap();
  assert_eq!(vitamins, vec![created]);

  let antibiotics = s
    .list_medicines(&MedicineQuery {
      category: Some("antibiotics".into()),
      ..query()
    })
    .await
    .unwrap();
  assert!(antibiotics.is_empty());
}

#[tokio::test]
async fn search_matches_name_substrings() {
  let s = MemoryStore::new();
  s.create_medicine(new_medicine("Aspirin", "painkillers")).await.unwrap();
  s.create_medicine(new_medicine("Amoxicillin", "antibiotics")).await.unwrap();

  for needle in ["amox", "cillin", "AMOX"] {
    let hits = s
      .list_medicines(&MedicineQuery {
        search: Some(needle.into()),
        ..query()
      })
      .await
      .unwrap();
    assert_eq!(names(&hits), ["Amoxicillin"], "search {needle:?}");
  }
}

#[tokio::test]
async fn search_matches_manufacturer() {
  let s = MemoryStore::new();
  let mut bayer = new_medicine("Aspirin", "painkillers");
  bayer.manufacturer = "Bayer".into();
  s.create_medicine(bayer).await.unwrap();
  s.create_medicine(new_medicine("Amoxicillin", "antibiotics")).await.unwrap();

  let hits = s
    .list_medicines(&MedicineQuery {
      search: Some("bay".into()),
      ..query()
    })
    .await
    .unwrap();
  assert_eq!(names(&hits), ["Aspirin"]);
}

#[tokio::test]
async fn expired_filter_uses_expiry_date() {
  let s = MemoryStore::new();
  // The store trusts its input, so a past expiry date can be written directly.
  let mut stale = new_medicine("Old Stock", "misc");
  stale.expiry_date = today().checked_sub_days(Days::new(3)).unwrap();
  s.create_medicine(stale).await.unwrap();
  let mut due = new_medicine("Due Today", "misc");
  due.expiry_date = today();
  s.create_medicine(due).await.unwrap();
  s.create_medicine(new_medicine("Fresh", "misc")).await.unwrap();

  let expired = s
    .list_medicines(&MedicineQuery {
      expired: Some(true),
      ..query()
    })
    .await
    .unwrap();
  assert_eq!(names(&expired), ["Due Today", "Old Stock"]);

  let fresh = s
    .list_medicines(&MedicineQuery {
      expired: Some(false),
      ..query()
    })
    .await
    .unwrap();
  assert_eq!(names(&fresh), ["Fresh"]);
}

#[tokio::test]
async fn filters_combine_with_and() {
  let s = MemoryStore::new();
  s.create_medicine(new_medicine("Aspirin", "painkillers")).await.unwrap();
  s.create_medicine(new_medicine("Aspirin Plus", "antipyretics")).await.unwrap();
  s.create_medicine(new_medicine("Ibuprofen", "painkillers")).await.unwrap();

  let hits = s
    .list_medicines(&MedicineQuery {
      category: Some("PAINKILLERS".into()),
      search: Some("aspirin".into()),
      expired: Some(false),
      ..query()
    })
    .await
    .unwrap();
  assert_eq!(names(&hits), ["Aspirin"]);
}

// ─── Categories ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn seeded_store_lists_categories_by_name() {
  let s = MemoryStore::seeded();
  let categories = s.list_categories().await.unwrap();
  assert_eq!(categories.len(), SEED_CATEGORIES.len());

  let got: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
  assert_eq!(
    got,
    ["antacids", "antibiotics", "antipyretics", "painkillers", "vitamins"]
  );
}

#[tokio::test]
async fn create_and_get_category() {
  let s = MemoryStore::new();
  let created = s
    .create_category(NewCategory::new("vitamins", Some("Vitamin supplements")))
    .await
    .unwrap();
  assert_eq!(s.get_category(created.id).await.unwrap(), Some(created));
  assert!(s.get_category(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_category_names_are_rejected() {
  let s = MemoryStore::new();
  let first = validate::category(dispensary_core::category::CategoryInput {
    name:        "Antibiotics".into(),
    description: None,
  })
  .unwrap();
  let second = validate::category(dispensary_core::category::CategoryInput {
    name:        "antibiotics".into(),
    description: None,
  })
  .unwrap();

  s.create_category(first).await.unwrap();
  let err = s.create_category(second).await.unwrap_err();
  assert!(
    matches!(&err, Error::DuplicateCategory(name) if name == "antibiotics"),
    "{err}"
  );
  assert_eq!(s.list_categories().await.unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_check_ignores_case_of_stored_names() {
  let s = MemoryStore::new();
  s.create_category(NewCategory::new("Vitamins", None)).await.unwrap();
  let err = s
    .create_category(NewCategory::new("vitamins", None))
    .await
    .unwrap_err();
  assert!(matches!(err, Error::DuplicateCategory(_)));
}

#[tokio::test]
async fn delete_category_blocked_while_referenced() {
  let s = MemoryStore::new();
  let category = s
    .create_category(NewCategory::new("painkillers", None))
    .await
    .unwrap();
  let mut shouty = new_medicine("Aspirin", "painkillers");
  shouty.category = "PainKillers".into();
  let a = s.create_medicine(shouty).await.unwrap();
  let b = s.create_medicine(new_medicine("Ibuprofen", "painkillers")).await.unwrap();
  s.create_medicine(new_medicine("Zinc", "vitamins")).await.unwrap();

  let err = s.delete_category(category.id).await.unwrap_err();
  match err {
    Error::CategoryInUse { name, count } => {
      assert_eq!(name, "painkillers");
      assert_eq!(count, 2);
    }
    other => panic!("unexpected error: {other}"),
  }
  assert!(s.get_category(category.id).await.unwrap().is_some());

  s.delete_medicine(a.id).await.unwrap();
  let err = s.delete_category(category.id).await.unwrap_err();
  assert!(matches!(err, Error::CategoryInUse { count: 1, .. }));

  s.delete_medicine(b.id).await.unwrap();
  assert!(s.delete_category(category.id).await.unwrap());
  assert!(s.get_category(category.id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_missing_category_returns_false() {
  let s = MemoryStore::seeded();
  assert!(!s.delete_category(Uuid::new_v4()).await.unwrap());
}

#[tokio::test]
async fn concurrent_updates_do_not_lose_writes() {
  let s = MemoryStore::new();
  let created = s.create_medicine(new_medicine("Aspirin", "painkillers")).await.unwrap();

  let id = created.id;
  let mut tasks = Vec::new();
  for i in 0..16u64 {
    let store = s.clone();
    tasks.push(tokio::spawn(async move {
      let patch = if i % 2 == 0 {
        MedicinePatch {
          stock_quantity: Some(i),
          ..Default::default()
        }
      } else {
        MedicinePatch {
          dosage: Some(format!("{i}mg")),
          ..Default::default()
        }
      };
      store.update_medicine(id, patch).await.unwrap();
    }));
  }
  for task in tasks {
    task.await.unwrap();
  }

  let last = s.get_medicine(created.id).await.unwrap().unwrap();
  assert_eq!(last.stock_quantity % 2, 0);
  assert!(last.dosage.ends_with("mg"));
  assert_ne!(last.dosage, "500mg");
  assert!(last.updated_at > created.updated_at);
}
