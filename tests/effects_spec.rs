use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use folio::content::builtin;
use folio::effects::*;
use speculate2::speculate;

/// Visibility source that records calls and can be switched off.
struct RecordingSource {
    available: bool,
    unobserved: Rc<RefCell<Vec<String>>>,
}

impl VisibilitySource for RecordingSource {
    fn observe(&mut self, _section: &SectionId, _options: &RevealOptions) -> bool {
        self.available
    }

    fn unobserve(&mut self, section: &SectionId) {
        self.unobserved.borrow_mut().push(section.to_string());
    }
}

fn reveal_controller(
    available: bool,
) -> (ScrollRevealController<RecordingSource>, Rc<RefCell<Vec<String>>>) {
    let unobserved = Rc::new(RefCell::new(Vec::new()));
    let source = RecordingSource {
        available,
        unobserved: Rc::clone(&unobserved),
    };
    (
        ScrollRevealController::new(source, RevealOptions::default()),
        unobserved,
    )
}

/// Step the typewriter through `ms` of simulated time.
fn elapse(typewriter: &mut Typewriter, ms: u64) {
    let mut elapsed = Duration::ZERO;
    let budget = Duration::from_millis(ms);
    while elapsed + typewriter.next_delay() <= budget {
        elapsed += typewriter.next_delay();
        typewriter.advance();
    }
}

speculate! {
    describe "scroll reveal" {
        before {
            let (mut reveal, unobserved) = reveal_controller(true);
            reveal.start(["home", "about", "skills", "projects"]);
        }

        it "keeps every section hidden until it is seen" {
            for section in reveal.sections() {
                assert!(!section.is_visible());
            }
        }

        it "reveals a section once its ratio reaches the threshold" {
            reveal.on_intersection(&[Intersection::new("about", 0.09)]);
            assert!(!reveal.is_visible(&SectionId::new("about")));

            reveal.on_intersection(&[Intersection::new("about", 0.1)]);
            assert!(reveal.is_visible(&SectionId::new("about")));
        }

        it "never hides a revealed section again" {
            reveal.on_intersection(&[Intersection::new("skills", 1.0)]);
            reveal.on_intersection(&[Intersection::new("skills", 0.0)]);
            reveal.on_intersection(&[Intersection {
                section: SectionId::new("skills"),
                ratio: 0.0,
                is_intersecting: false,
            }]);
            assert!(reveal.is_visible(&SectionId::new("skills")));
        }

        it "stops observing a section as soon as it fires" {
            reveal.on_intersection(&[Intersection::new("home", 0.5)]);
            reveal.on_intersection(&[Intersection::new("home", 0.8)]);
            assert_eq!(*unobserved.borrow(), vec!["home"]);
            assert!(!reveal.is_observing(&SectionId::new("home")));
        }

        it "reveals sections independently of notification order" {
            let revealed = reveal.on_intersection(&[
                Intersection::new("projects", 0.3),
                Intersection::new("home", 0.2),
            ]);
            assert_eq!(revealed, vec![SectionId::new("projects"), SectionId::new("home")]);
            assert!(!reveal.is_visible(&SectionId::new("about")));
        }

        it "releases pending sections on stop" {
            reveal.on_intersection(&[Intersection::new("home", 1.0)]);
            reveal.stop();
            let mut released = unobserved.borrow().clone();
            released.sort();
            assert_eq!(released, vec!["about", "home", "projects", "skills"]);
        }
    }

    describe "scroll reveal without a visibility facility" {
        it "leaves sections in their initial state" {
            let (mut reveal, unobserved) = reveal_controller(false);
            assert_eq!(reveal.start(["home", "about"]), 0);
            reveal.on_intersection(&[Intersection::new("about", 1.0)]);

            assert!(!reveal.is_visible(&SectionId::new("about")));
            assert!(unobserved.borrow().is_empty());
        }
    }

    describe "typewriter" {
        before {
            let titles = ["Full-Stack Developer", "React.js Developer", "Python Developer"];
            let mut typewriter = Typewriter::new(titles, TypewriterTiming::default())
                .expect("titles");
            let first_len = titles[0].chars().count() as u64;
        }

        it "starts on the first title with nothing shown" {
            assert_eq!(typewriter.index(), 0);
            assert_eq!(typewriter.text(), "");
            assert_eq!(typewriter.phase(), Phase::Typing);
        }

        it "shows the full first title after one type interval per character" {
            elapse(&mut typewriter, 100 * first_len);
            assert_eq!(typewriter.text(), titles[0]);
            assert_eq!(typewriter.phase(), Phase::PausedFull);
        }

        it "is one character short just before that" {
            elapse(&mut typewriter, 100 * first_len - 1);
            assert_eq!(typewriter.text().chars().count() as u64, first_len - 1);
        }

        it "holds the full title for the pause" {
            elapse(&mut typewriter, 100 * first_len + 1499);
            assert_eq!(typewriter.text(), titles[0]);
        }

        it "is empty on the next title after pausing and deleting" {
            elapse(&mut typewriter, 100 * first_len + 1500 + 50 * first_len);
            assert_eq!(typewriter.text(), "");
            assert_eq!(typewriter.index(), 1);
            assert_eq!(typewriter.phase(), Phase::Typing);
        }

        it "only ever changes the text by one character per step" {
            let mut previous = typewriter.text().chars().count() as i64;
            for _ in 0..200 {
                let frame = typewriter.advance();
                let current = frame.text.chars().count() as i64;
                assert!((current - previous).abs() <= 1);
                previous = current;
            }
        }
    }

    describe "typewriter over two titles" {
        it "returns to the first title after a full cycle" {
            let mut typewriter = Typewriter::new(["A", "BB"], TypewriterTiming::default())
                .expect("titles");
            // A: 100 + 1500 + 50; BB: 200 + 1500 + 100
            elapse(&mut typewriter, 1650 + 1800);
            assert_eq!(typewriter.index(), 0);
            assert_eq!(typewriter.text(), "");
            assert_eq!(typewriter.phase(), Phase::Typing);
        }
    }

    describe "project filter" {
        before {
            let portfolio = builtin();
        }

        it "returns every project for all, in order" {
            let ids: Vec<u32> = filter(&portfolio.projects, "all").iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![1, 2, 3, 4]);
        }

        it "returns only frontend projects for frontend" {
            let frontend = filter(&portfolio.projects, "frontend");
            assert_eq!(frontend.len(), 1);
            assert!(frontend.iter().all(|p| p.category == "frontend"));
        }

        it "keeps the relative order of matching projects" {
            let ids: Vec<u32> = filter(&portfolio.projects, "fullstack").iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![1, 2]);
        }

        it "gives the same answer every time" {
            let filter_state = ProjectFilter::new("backend");
            assert_eq!(filter_state.apply(&portfolio.projects), filter_state.apply(&portfolio.projects));
        }
    }
}
