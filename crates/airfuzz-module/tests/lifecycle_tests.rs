//! Integration tests for the module lifecycle against a scripted dissector.

#![allow(clippy::indexing_slicing)]

use std::sync::Arc;

use airfuzz_module::prelude::*;
use airfuzz_test_helpers::prelude::*;
use tracing_test::traced_test;

fn rrc_setup_spec() -> ModuleSpec {
    ModuleSpec {
        name: "mediatek_rrc_setup".to_owned(),
        filter: paths::RRC_SETUP.to_owned(),
        patches: vec![(123, 0x09).into(), (266, 0x6d).into(), (267, 0x84).into()],
        offset_base: 48,
        config: ConfigOverride::default(),
        diagnostic: Some("Malformed rrc setup sent!".to_owned()),
    }
}

fn run_packet(
    module: &mut MutatorModule,
    ctx: &mut ExecutionContext,
    buf: &mut [u8],
) -> PostStatus {
    ctx.begin_packet();
    module.pre_dissection(buf, &mut ctx.packet_scope());
    let tree = ctx.dissect(buf).ok();
    ctx.evaluate(tree.as_ref());
    module.post_dissection(buf, &mut ctx.packet_scope())
}

#[test]
fn matching_packet_is_mutated_at_rebased_offsets() {
    let dissector = ScriptedDissector::with_vocabulary([paths::RRC_SETUP]);
    dissector.push_elements([paths::RRC_SETUP]);
    let mut ctx = ExecutionContext::new(Arc::new(dissector));

    let mut module = must(MutatorModule::from_spec(&rrc_setup_spec()));
    must(module.setup(&mut ctx.setup_scope()));

    let mut buf = PacketBufferFixture::zeroed(800).build();
    let status = run_packet(&mut module, &mut ctx, &mut buf);

    assert_eq!(status, PostStatus::Mutated);
    assert_eq!(status.code(), 1);
    assert_eq!(buf[75], 0x09);
    assert_eq!(buf[218], 0x6d);
    assert_eq!(buf[219], 0x84);
    assert_eq!(buf.iter().filter(|&&b| b != 0).count(), 3);
}

#[test]
fn non_matching_packet_is_left_untouched() {
    let dissector = ScriptedDissector::with_vocabulary([paths::RRC_SETUP]);
    dissector.push_elements([paths::SECURITY_MODE_COMMAND]);
    let mut ctx = ExecutionContext::new(Arc::new(dissector));

    let mut module = must(MutatorModule::from_spec(&rrc_setup_spec()));
    must(module.setup(&mut ctx.setup_scope()));

    let mut buf = PacketBufferFixture::zeroed(800).build();
    let status = run_packet(&mut module, &mut ctx, &mut buf);

    assert_eq!(status, PostStatus::Unchanged);
    assert_eq!(status.code(), 0);
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn decode_failure_reads_as_no_match() {
    let dissector = ScriptedDissector::with_vocabulary([paths::RRC_SETUP]);
    dissector.push_malformed("truncated pdu");
    let mut ctx = ExecutionContext::new(Arc::new(dissector));

    let mut module = must(MutatorModule::from_spec(&rrc_setup_spec()));
    must(module.setup(&mut ctx.setup_scope()));

    let mut buf = PacketBufferFixture::zeroed(800).build();
    let status = run_packet(&mut module, &mut ctx, &mut buf);

    assert_eq!(status, PostStatus::Unchanged);
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn short_buffer_match_still_reports_mutated() {
    let dissector = ScriptedDissector::with_vocabulary([paths::RRC_SETUP]);
    dissector.push_elements([paths::RRC_SETUP]);
    let mut ctx = ExecutionContext::new(Arc::new(dissector));

    let mut module = must(MutatorModule::from_spec(&rrc_setup_spec()));
    must(module.setup(&mut ctx.setup_scope()));

    // 40 bytes is below every rebased offset (75/218/219): all writes skip,
    // but the status still reports the match.
    let mut buf = PacketBufferFixture::zeroed(40).build();
    let status = run_packet(&mut module, &mut ctx, &mut buf);

    assert_eq!(status, PostStatus::Mutated);
    assert_eq!(status.code(), 1);
    assert!(buf.iter().all(|&b| b == 0));
}

#[test]
fn match_state_does_not_leak_across_packets() {
    let dissector = ScriptedDissector::with_vocabulary([paths::RRC_SETUP]);
    dissector.push_elements([paths::RRC_SETUP]);
    dissector.push_elements(Vec::<String>::new());
    let mut ctx = ExecutionContext::new(Arc::new(dissector));

    let mut module = must(MutatorModule::from_spec(&rrc_setup_spec()));
    must(module.setup(&mut ctx.setup_scope()));

    let mut first = PacketBufferFixture::zeroed(800).build();
    assert_eq!(run_packet(&mut module, &mut ctx, &mut first), PostStatus::Mutated);

    let mut second = PacketBufferFixture::zeroed(800).build();
    assert_eq!(run_packet(&mut module, &mut ctx, &mut second), PostStatus::Unchanged);
    assert!(second.iter().all(|&b| b == 0));
}

#[test]
fn setup_failure_surfaces_the_filter_name() {
    let dissector = ScriptedDissector::with_vocabulary([paths::SECURITY_MODE_COMMAND]);
    let mut ctx = ExecutionContext::new(Arc::new(dissector));

    let mut module = must(MutatorModule::from_spec(&rrc_setup_spec()));
    let err = must_err(module.setup(&mut ctx.setup_scope()));
    assert!(err.to_string().contains(paths::RRC_SETUP));
}

#[traced_test]
#[test]
fn diagnostic_message_is_logged_on_mutation() {
    let dissector = ScriptedDissector::with_vocabulary([paths::RRC_SETUP]);
    dissector.push_elements([paths::RRC_SETUP]);
    let mut ctx = ExecutionContext::new(Arc::new(dissector));

    let mut module = must(MutatorModule::from_spec(&rrc_setup_spec()));
    must(module.setup(&mut ctx.setup_scope()));

    let mut buf = PacketBufferFixture::zeroed(800).build();
    run_packet(&mut module, &mut ctx, &mut buf);

    assert!(logs_contain("Malformed rrc setup sent!"));
}
