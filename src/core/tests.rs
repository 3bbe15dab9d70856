#[cfg(test)]
mod tests {
    use crate::core::{AccordionState, Direction, PlaceholderCycle, TypewriterConfig};
    use std::time::Duration;

    fn cycle(phrases: &[&str]) -> PlaceholderCycle {
        PlaceholderCycle::new(phrases.iter().copied(), TypewriterConfig::default()).unwrap()
    }

    /// Ticks needed to type and delete every phrase once
    fn full_loop_ticks(phrases: &[&str]) -> usize {
        phrases
            .iter()
            .map(|p| {
                let len = p.chars().count();
                // An empty phrase still takes one tick each way
                2 * len.max(1)
            })
            .sum()
    }

    #[test]
    fn test_cat_dog_scenario() {
        let mut tw = cycle(&["cat", "dog"]);
        let config = TypewriterConfig::default();

        tw.tick();
        tw.tick();
        let delay = tw.tick();
        assert_eq!(tw.display(), "cat");
        assert_eq!(delay, config.pause);

        for _ in 0..3 {
            tw.tick();
        }
        assert_eq!(tw.display(), "");

        tw.tick();
        assert_eq!(tw.display(), "d");
        assert_eq!(tw.current_index(), 1);
    }

    #[test]
    fn test_display_is_always_prefix_of_current_phrase() {
        let lists: &[&[&str]] = &[
            &["a"],
            &["cat", "dog"],
            &["", "x", ""],
            &["Automate reports", "Sync invoices", "Ship faster"],
            &["日本語", "ñandú", "🚀🚀"],
        ];

        for phrases in lists {
            let mut tw = cycle(phrases);
            for _ in 0..3 * full_loop_ticks(phrases) {
                tw.tick();
                let shown = tw.display();
                assert!(tw.current_phrase().starts_with(shown));
                assert!(shown.chars().count() <= tw.current_phrase().chars().count());
            }
        }
    }

    #[test]
    fn test_wraps_back_to_first_phrase() {
        for n in 1..=5 {
            let owned: Vec<String> = (0..n).map(|i| format!("phrase {i}")).collect();
            let phrases: Vec<&str> = owned.iter().map(String::as_str).collect();
            let mut tw = cycle(&phrases);

            let mut visited = vec![false; n];
            let mut wrapped = false;
            for _ in 0..full_loop_ticks(&phrases) {
                let before = tw.current_index();
                tw.tick();
                visited[tw.current_index()] = true;
                if before == n - 1 && tw.current_index() == 0 {
                    wrapped = true;
                }
            }

            assert!(wrapped, "list of {n} never wrapped");
            assert!(visited.iter().all(|v| *v));
            assert_eq!(tw.current_index(), 0);
            assert_eq!(tw.direction(), Direction::Typing);
            assert_eq!(tw.display(), "");
        }
    }

    #[test]
    fn test_delay_sequence_for_one_loop() {
        let config = TypewriterConfig::new(
            Duration::from_millis(3),
            Duration::from_millis(2),
            Duration::from_millis(50),
        );
        let mut tw = PlaceholderCycle::new(["hi"], config).unwrap();
        let delays: Vec<u128> = (0..4).map(|_| tw.tick().as_millis()).collect();
        assert_eq!(delays, vec![3, 50, 2, 3]);
    }

    #[test]
    fn test_faq_scenario() {
        let mut accordion = AccordionState::new();
        let open_items =
            |state: &AccordionState| (0..5).filter(|i| state.is_open(*i)).collect::<Vec<_>>();

        assert!(open_items(&accordion).is_empty());

        accordion.select(2);
        assert_eq!(open_items(&accordion), vec![2]);

        accordion.select(4);
        assert_eq!(open_items(&accordion), vec![4]);

        accordion.select(4);
        assert!(open_items(&accordion).is_empty());
    }

    #[test]
    fn test_accordion_never_has_two_open() {
        let events = [0, 1, 1, 3, 3, 3, 2, 0, 4, 4, 2, 1, 0, 0];
        let mut state = AccordionState::new();

        for index in events {
            state.select(index);
            let open = (0..5).filter(|i| state.is_open(*i)).count();
            assert!(open <= 1);
        }
    }

    #[test]
    fn test_double_select_closes() {
        for index in 0..5 {
            let mut state = AccordionState::new();
            state.select((index + 1) % 5);
            state.select(index);
            state.select(index);
            assert_eq!(state.open_index(), None);
        }
    }
}
