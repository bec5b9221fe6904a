use gym_core::{init, session::Session};

#[test]
fn session_smoke() {
    init();

    let mut session = Session::default();
    session
        .register_member("Kofi Mensah", "+233000000010", "Basic ($20)")
        .expect("register member");
    session.record_sale("Water ($1)").expect("sell water");

    let summary = session.summary();
    assert_eq!(summary.active_members, 2);
    assert_eq!(summary.total_revenue, 71.0);
    assert_eq!(session.search_members("kofi").len(), 1);
}
