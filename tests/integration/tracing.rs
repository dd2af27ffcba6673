//! Integration tests for tracing unification

use clausal::debug::{TraceEvent, Tracer, TracerConfig};
use clausal::program::{Clause, Program};
use clausal::term::{Term, TermFactory};
use clausal::unify::{Trail, Unifier};

#[test]
fn trace_of_a_clause_lookup() {
    let mut f = TermFactory::default();
    let mut program = Program::new();
    program
        .add_all([
            Clause::fact(Term::structure("color", [Term::atom("sky"), Term::atom("blue")])),
            Clause::fact(Term::structure("color", [Term::atom("grass"), Term::atom("green")])),
        ])
        .unwrap();

    let c = f.variable("C");
    let goal = f.structure("color", [Term::atom("grass"), c]);

    let mut tracer = Tracer::new(TracerConfig::new().enabled());
    let mut trail = Trail::new();
    let unifier = Unifier::default();
    for clause in program.get("color", 2).iter() {
        let Some(head) = clause.head() else {
            continue;
        };
        let mark = trail.mark();
        unifier.unify_observed(&goal, head, &mut trail, &mut tracer);
        trail.rewind_observed(mark, &mut tracer);
    }

    assert_eq!(tracer.current_query(), 2);
    let first: Vec<_> = tracer
        .buffer()
        .records_for_query(1)
        .iter()
        .map(|r| r.event_type())
        .collect();
    assert_eq!(first, vec!["unify-start", "mismatch", "unify-end", "rewind"]);

    let binds = tracer.buffer().by_event_type("bind");
    assert_eq!(binds.len(), 1);
    assert!(matches!(
        &binds[0].event,
        TraceEvent::Bind { term, .. } if *term == Term::atom("green")
    ));

    let text = tracer.format_records(&tracer.buffer().recent(2));
    assert!(text.contains("REWIND"));
}

#[test]
fn json_trace_lines() {
    let mut f = TermFactory::default();
    let x = f.variable("X");
    let mut tracer = Tracer::new(TracerConfig::new().enabled().json());
    let mut trail = Trail::new();

    Unifier::default().unify_observed(&x, &Term::atom("a"), &mut trail, &mut tracer);

    let records: Vec<_> = tracer.buffer().iter().collect();
    let json = tracer.format_records(&records);
    assert!(json.starts_with('['));
    assert!(json.contains("\"type\":\"bind\""));
    assert!(json.contains("\"var\":\"X\""));
}

#[test]
fn disabled_tracer_costs_nothing_to_keep_around() {
    let mut tracer = Tracer::default();
    let mut trail = Trail::new();
    let unifier = Unifier::default();
    for n in 0..100 {
        unifier.unify_observed(&Term::Integer(n), &Term::Integer(n), &mut trail, &mut tracer);
    }
    assert!(tracer.buffer().is_empty());
    assert_eq!(tracer.stats().record_count, 0);
}
