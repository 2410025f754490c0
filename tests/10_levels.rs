mod common;

use anyhow::Result;
use common::OrgFixture;
use crm_hierarchy::store::{RoleRecord, UserRecord};

// Level resolution over the role report_to graph, exercised through
// HierarchyEngine::user_level with single-role users.

#[tokio::test]
async fn root_role_is_level_zero() -> Result<()> {
    let fixture = OrgFixture::new();
    let root = fixture.root_role("manager");
    let user = fixture.user("alice", &root);

    let engine = fixture.engine();
    assert_eq!(engine.user_level(&user.id).await?, Some(0));
    Ok(())
}

#[tokio::test]
async fn chain_levels_increment_per_hop() -> Result<()> {
    let fixture = OrgFixture::new();
    let tier = fixture.three_tier();

    let engine = fixture.engine();
    assert_eq!(engine.user_level(&tier.alice.id).await?, Some(0));
    assert_eq!(engine.user_level(&tier.bob.id).await?, Some(1));
    assert_eq!(engine.user_level(&tier.carol.id).await?, Some(2));
    Ok(())
}

#[tokio::test]
async fn self_cycle_yields_unknown_level() -> Result<()> {
    let fixture = OrgFixture::new();
    let cyclic = fixture.self_cycle_role("ouroboros");
    let dave = fixture.user("dave", &cyclic);

    let engine = fixture.engine();
    assert_eq!(engine.user_level(&dave.id).await?, None);
    Ok(())
}

#[tokio::test]
async fn two_role_cycle_yields_unknown_level_for_both() -> Result<()> {
    let fixture = OrgFixture::new();
    let mut a = RoleRecord::root("alpha");
    let mut b = RoleRecord::root("beta");
    a.report_to = Some(b.id.clone());
    b.report_to = Some(a.id.clone());
    fixture.store.insert_role(a.clone());
    fixture.store.insert_role(b.clone());
    let holder_a = fixture.user("hana", &a);
    let holder_b = fixture.user("hugo", &b);

    let engine = fixture.engine();
    assert_eq!(engine.user_level(&holder_a.id).await?, None);
    assert_eq!(engine.user_level(&holder_b.id).await?, None);
    Ok(())
}

#[tokio::test]
async fn dangling_report_to_is_treated_as_root() -> Result<()> {
    let fixture = OrgFixture::new();
    let mut orphan = RoleRecord::root("orphan");
    orphan.report_to = Some("no-such-role".to_string());
    fixture.store.insert_role(orphan.clone());
    let below = fixture.role_under("below-orphan", &orphan);

    let at_orphan = fixture.user("olga", &orphan);
    let below_orphan = fixture.user("omar", &below);

    let engine = fixture.engine();
    assert_eq!(engine.user_level(&at_orphan.id).await?, Some(0));
    assert_eq!(engine.user_level(&below_orphan.id).await?, Some(1));
    Ok(())
}

#[tokio::test]
async fn roleless_user_has_unknown_level() -> Result<()> {
    let fixture = OrgFixture::new();
    let eve = fixture.roleless_user("eve");

    let engine = fixture.engine();
    assert_eq!(engine.user_level(&eve.id).await?, None);
    Ok(())
}

#[tokio::test]
async fn unresolvable_role_ids_behave_like_no_roles() -> Result<()> {
    let fixture = OrgFixture::new();
    let user = UserRecord::new("ghost-roles").with_role_id("deleted-role");
    fixture.store.insert_user(user.clone());

    let engine = fixture.engine();
    assert_eq!(engine.user_level(&user.id).await?, None);
    Ok(())
}

#[tokio::test]
async fn multi_role_user_takes_most_senior_level() -> Result<()> {
    let fixture = OrgFixture::new();
    let tier = fixture.three_tier();

    // Holds both the mid and leaf roles; the senior (lower) level wins.
    let both = UserRecord::new("mixed")
        .with_role(&tier.mid)
        .with_role(&tier.leaf);
    fixture.store.insert_user(both.clone());

    let engine = fixture.engine();
    assert_eq!(engine.user_level(&both.id).await?, Some(1));
    Ok(())
}

#[tokio::test]
async fn cyclic_role_is_ignored_when_another_role_resolves() -> Result<()> {
    let fixture = OrgFixture::new();
    let tier = fixture.three_tier();
    let cyclic = fixture.self_cycle_role("broken");

    let user = UserRecord::new("patched")
        .with_role(&cyclic)
        .with_role(&tier.leaf);
    fixture.store.insert_user(user.clone());

    let engine = fixture.engine();
    assert_eq!(engine.user_level(&user.id).await?, Some(2));
    Ok(())
}

#[tokio::test]
async fn unknown_user_has_unknown_level() -> Result<()> {
    let fixture = OrgFixture::new();
    let engine = fixture.engine();
    assert_eq!(engine.user_level("nobody").await?, None);
    Ok(())
}
