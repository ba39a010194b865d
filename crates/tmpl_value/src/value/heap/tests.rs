use super::*;

#[test]
fn deref_reaches_payload() {
    let h = Heap::new(String::from("storage"));
    assert_eq!(h.len(), 7);
    assert_eq!(&*h, "storage");
}

#[test]
fn clone_shares_allocation() {
    let h1 = Heap::new(vec![1, 2, 3]);
    let h2 = h1.clone();
    assert!(Heap::ptr_eq(&h1, &h2));
    assert!(Arc::ptr_eq(&h1.0, &h2.0));
}

#[test]
fn equality_is_by_content() {
    let h1 = Heap::new("hello".to_string());
    let h2 = Heap::new("hello".to_string());
    let h3 = Heap::new("world".to_string());
    assert!(!Heap::ptr_eq(&h1, &h2));
    assert_eq!(h1, h2);
    assert_ne!(h1, h3);
}
