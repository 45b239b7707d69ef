//! Core board model for the hexagonal marble-matching puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Element`: the closed set of marble symbols, each with a fixed
//!   matching `Category`.
//! - `Marble`: one occupied cell, holding its neighbour links and an
//!   incrementally maintained "available" (clearable) flag.
//! - `Board`: the radius-5 hexagonal window, stored as a dense grid of
//!   optional marble ids over a marble arena.
//!
//! The board is built once from external input; after that only marble
//! removal and re-addition mutate it, and both keep every neighbour
//! occupancy mask exact without ever rescanning the grid.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::fmt;

use crate::error::{Error, Result};

/// Width of the dense grid backing the hexagonal window. Axial coordinates
/// are stored as `0..GRID_SIZE` indices with the board center at
/// (`CENTER`, `CENTER`).
pub const GRID_SIZE: usize = 11;

/// Grid index of the center cell on both axes.
pub const CENTER: usize = 5;

/// Radius of the playable hexagonal window around the center.
pub const RADIUS: usize = 5;

// Direction layout around a cell, as (dq, dr) axial offsets:
//
//    4   5
//   3  *  0
//    2   1
pub(crate) const DIRECTIONS: [(i32, i32); 6] =
    [(1, 0), (0, 1), (-1, 1), (-1, 0), (0, -1), (1, -1)];

/// Lookup from a 6-bit neighbour-occupancy mask to the "available" flag:
/// true iff the mask has three cyclically-consecutive zero bits, i.e. the
/// cell has three adjacent open slots around the hex.
pub(crate) const AVAILABLE_LOOKUP: [bool; 64] = availability_table();

const fn availability_table() -> [bool; 64] {
    let mut table = [false; 64];
    let mut mask = 0;
    while mask < 64 {
        let mut dir = 0;
        while dir < 6 {
            let gap = (1 << dir) | (1 << ((dir + 1) % 6)) | (1 << ((dir + 2) % 6));
            if mask & gap == 0 {
                table[mask] = true;
                break;
            }
            dir += 1;
        }
        mask += 1;
    }
    table
}

/// Matching category of an element. Derived from the symbol once, at
/// construction, and never recomputed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Fire, water, earth, air: removed in identical pairs, paired with
    /// salt, or consumed by an essence combo.
    Basic,
    /// Lead through gold: removed in the canonical order, paired with
    /// mercury (gold alone goes solo, last).
    Metal,
    /// Pairs with the currently removable metal.
    Mercury,
    /// Life and death: removed as a life/death pair.
    Vitality,
    /// Wildcard: pairs with any basic element or another salt.
    Salt,
    /// Removed five at a time with one of each basic element.
    Essence,
}

/// A marble symbol.
///
/// # Examples
///
/// ```
/// use sigmar_solver::engine::{Category, Element};
/// assert_eq!(Element::Fire.category(), Category::Basic);
/// assert_eq!(Element::Tin.category(), Category::Metal);
/// assert_eq!(Element::from_char('Q').unwrap(), Element::Essence);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Element {
    Fire,
    Water,
    Earth,
    Air,
    Lead,
    Tin,
    Iron,
    Copper,
    Silver,
    Gold,
    Mercury,
    Life,
    Death,
    Salt,
    Essence,
}

impl Element {
    /// The four basic elements, in the order used for per-kind counting.
    pub const BASICS: [Element; 4] = [Element::Fire, Element::Water, Element::Earth, Element::Air];

    /// The six metals in canonical removal order, lead first.
    pub const METALS: [Element; 6] = [
        Element::Lead,
        Element::Tin,
        Element::Iron,
        Element::Copper,
        Element::Silver,
        Element::Gold,
    ];

    /// Returns the fixed matching category of this symbol.
    pub fn category(self) -> Category {
        match self {
            Element::Fire | Element::Water | Element::Earth | Element::Air => Category::Basic,
            Element::Lead
            | Element::Tin
            | Element::Iron
            | Element::Copper
            | Element::Silver
            | Element::Gold => Category::Metal,
            Element::Mercury => Category::Mercury,
            Element::Life | Element::Death => Category::Vitality,
            Element::Salt => Category::Salt,
            Element::Essence => Category::Essence,
        }
    }

    /// Index into [`Element::BASICS`], or `None` for non-basic symbols.
    pub(crate) fn basic_index(self) -> Option<usize> {
        match self {
            Element::Fire => Some(0),
            Element::Water => Some(1),
            Element::Earth => Some(2),
            Element::Air => Some(3),
            _ => None,
        }
    }

    /// Single-character representation, used by the text board format and
    /// the board display.
    pub fn to_char(self) -> char {
        match self {
            Element::Fire => 'F',
            Element::Water => 'W',
            Element::Earth => 'E',
            Element::Air => 'A',
            Element::Lead => 'L',
            Element::Tin => 'T',
            Element::Iron => 'I',
            Element::Copper => 'C',
            Element::Silver => 'S',
            Element::Gold => 'G',
            Element::Mercury => 'M',
            Element::Life => 'V',
            Element::Death => 'D',
            Element::Salt => 'X',
            Element::Essence => 'Q',
        }
    }

    /// Inverse of [`Element::to_char`]. Unrecognized characters are a
    /// construction-time error, never silently defaulted.
    pub fn from_char(c: char) -> Result<Element> {
        Ok(match c {
            'F' => Element::Fire,
            'W' => Element::Water,
            'E' => Element::Earth,
            'A' => Element::Air,
            'L' => Element::Lead,
            'T' => Element::Tin,
            'I' => Element::Iron,
            'C' => Element::Copper,
            'S' => Element::Silver,
            'G' => Element::Gold,
            'M' => Element::Mercury,
            'V' => Element::Life,
            'D' => Element::Death,
            'X' => Element::Salt,
            'Q' => Element::Essence,
            _ => return Err(Error::UnknownSymbol(c.to_string())),
        })
    }

    /// Parses a symbol name as reported by the upstream detector.
    ///
    /// The detector distinguishes variants of some symbols with an `_a`
    /// suffix; the suffix carries no meaning here and is stripped.
    pub fn from_name(name: &str) -> Result<Element> {
        let base = name.strip_suffix("_a").unwrap_or(name);
        Ok(match base {
            "fire" => Element::Fire,
            "water" => Element::Water,
            "earth" => Element::Earth,
            "air" => Element::Air,
            "lead" => Element::Lead,
            "tin" => Element::Tin,
            "iron" => Element::Iron,
            "copper" => Element::Copper,
            "silver" => Element::Silver,
            "gold" => Element::Gold,
            "mercury" => Element::Mercury,
            "life" => Element::Life,
            "death" => Element::Death,
            "salt" => Element::Salt,
            "essence" => Element::Essence,
            _ => return Err(Error::UnknownSymbol(name.to_string())),
        })
    }

    /// Lowercase name, used when printing solutions.
    pub fn name(self) -> &'static str {
        match self {
            Element::Fire => "fire",
            Element::Water => "water",
            Element::Earth => "earth",
            Element::Air => "air",
            Element::Lead => "lead",
            Element::Tin => "tin",
            Element::Iron => "iron",
            Element::Copper => "copper",
            Element::Silver => "silver",
            Element::Gold => "gold",
            Element::Mercury => "mercury",
            Element::Life => "life",
            Element::Death => "death",
            Element::Salt => "salt",
            Element::Essence => "essence",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of a marble inside its board's arena.
pub type MarbleId = usize;

/// One occupied cell on the hex grid.
///
/// Neighbour links are computed once at board construction and never
/// change; during search only the occupancy bits of `neighbour_mask`, the
/// `removed` flag and the cached `available` flag mutate.
#[derive(Clone, Debug)]
pub struct Marble {
    symbol: Element,
    category: Category,
    q: usize,
    r: usize,
    removed: bool,
    /// Bit `d` is set iff the neighbour in direction `d` exists and is not
    /// currently removed.
    neighbour_mask: u8,
    available: bool,
    /// Fixed (direction, neighbour id) links for the occupied neighbour
    /// cells found at construction time.
    neighbours: Vec<(u8, MarbleId)>,
}

impl Marble {
    fn new(symbol: Element, q: usize, r: usize) -> Marble {
        Marble {
            symbol,
            category: symbol.category(),
            q,
            r,
            removed: false,
            neighbour_mask: 0,
            available: false,
            neighbours: Vec::new(),
        }
    }

    pub fn symbol(&self) -> Element {
        self.symbol
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Grid coordinate, `0..GRID_SIZE` on both axes.
    pub fn coord(&self) -> (usize, usize) {
        (self.q, self.r)
    }

    /// Axial coordinate relative to the board center, the frame solutions
    /// are reported in.
    pub fn centered_coord(&self) -> (i32, i32) {
        (self.q as i32 - CENTER as i32, self.r as i32 - CENTER as i32)
    }

    pub fn is_removed(&self) -> bool {
        self.removed
    }

    /// Whether the marble is currently clearable: present, with three
    /// cyclically-consecutive open neighbour slots.
    pub fn is_available(&self) -> bool {
        self.available
    }
}

/// The board: a dense grid of optional marble ids over a marble arena.
///
/// Cell occupancy in `cells` is the single source of truth; each marble's
/// neighbour mask mirrors it and is maintained incrementally by
/// [`Board::remove`] and [`Board::add`]. A board is exclusively owned by
/// one solve invocation and mutated in place for its duration.
#[derive(Clone, Debug)]
pub struct Board {
    cells: [[Option<MarbleId>; GRID_SIZE]; GRID_SIZE],
    marbles: Vec<Marble>,
}

impl Board {
    /// Builds a board from `(q, r, element)` entries and initializes all
    /// neighbour links and availability flags.
    ///
    /// Fails on cells outside the hexagonal window and on doubly-occupied
    /// cells.
    ///
    /// # Examples
    ///
    /// ```
    /// use sigmar_solver::engine::{Board, Element, CENTER};
    /// let board = Board::from_entries(&[(CENTER, CENTER, Element::Gold)]).unwrap();
    /// assert_eq!(board.remaining(), 1);
    /// assert!(board.marble(0).is_available());
    /// ```
    pub fn from_entries(entries: &[(usize, usize, Element)]) -> Result<Board> {
        let mut board = Board {
            cells: [[None; GRID_SIZE]; GRID_SIZE],
            marbles: Vec::with_capacity(entries.len()),
        };
        for &(q, r, symbol) in entries {
            if !Board::in_window(q, r) {
                return Err(Error::OutOfWindow {
                    q: q as i32,
                    r: r as i32,
                });
            }
            if board.cells[q][r].is_some() {
                return Err(Error::CellOccupied { q, r });
            }
            let id = board.marbles.len();
            board.marbles.push(Marble::new(symbol, q, r));
            board.cells[q][r] = Some(id);
        }
        board.init_links();
        Ok(board)
    }

    /// Builds a random fully populated board with the standard marble
    /// composition: one of each metal, five mercury, four salt, four each
    /// of life and death, eight of each basic element (55 marbles on the
    /// 91 window cells).
    ///
    /// The same seed always produces the same board. There is no
    /// solvability guarantee.
    pub fn new_random_with_seed(seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut cells: Vec<(usize, usize)> = Vec::with_capacity(91);
        for q in 0..GRID_SIZE {
            for r in 0..GRID_SIZE {
                if Board::in_window(q, r) {
                    cells.push((q, r));
                }
            }
        }
        cells.shuffle(&mut rng);

        let entries: Vec<(usize, usize, Element)> = standard_composition()
            .into_iter()
            .zip(cells)
            .map(|(element, (q, r))| (q, r, element))
            .collect();
        Board::from_entries(&entries).expect("shuffled window cells are distinct and in range")
    }

    /// Whether `(q, r)` lies inside the radius-5 hexagonal window.
    pub fn in_window(q: usize, r: usize) -> bool {
        if q >= GRID_SIZE || r >= GRID_SIZE {
            return false;
        }
        let dq = q as i32 - CENTER as i32;
        let dr = r as i32 - CENTER as i32;
        dq.abs() <= RADIUS as i32 && dr.abs() <= RADIUS as i32 && (dq + dr).abs() <= RADIUS as i32
    }

    /// Scans each marble's six neighbour cells once, recording links, the
    /// initial occupancy mask and the initial availability flag. Called
    /// exactly once, from construction.
    fn init_links(&mut self) {
        for id in 0..self.marbles.len() {
            let q = self.marbles[id].q as i32;
            let r = self.marbles[id].r as i32;
            let mut mask = 0u8;
            let mut neighbours = Vec::new();
            for (dir, &(dq, dr)) in DIRECTIONS.iter().enumerate() {
                let (nq, nr) = (q + dq, r + dr);
                if nq < 0 || nr < 0 || nq >= GRID_SIZE as i32 || nr >= GRID_SIZE as i32 {
                    continue;
                }
                if let Some(nid) = self.cells[nq as usize][nr as usize] {
                    neighbours.push((dir as u8, nid));
                    mask |= 1 << dir;
                }
            }
            let marble = &mut self.marbles[id];
            marble.neighbours = neighbours;
            marble.neighbour_mask = mask;
            marble.available = AVAILABLE_LOOKUP[mask as usize];
        }
    }

    pub fn marbles(&self) -> &[Marble] {
        &self.marbles
    }

    pub fn marble(&self, id: MarbleId) -> &Marble {
        &self.marbles[id]
    }

    /// Arena id of the marble currently occupying `(q, r)`, if any.
    pub fn id_at(&self, q: usize, r: usize) -> Option<MarbleId> {
        if q >= GRID_SIZE || r >= GRID_SIZE {
            return None;
        }
        self.cells[q][r]
    }

    /// The marble currently occupying `(q, r)`, if any.
    pub fn marble_at(&self, q: usize, r: usize) -> Option<&Marble> {
        self.id_at(q, r).map(|id| &self.marbles[id])
    }

    /// Number of marbles not yet removed.
    pub fn remaining(&self) -> usize {
        self.marbles.iter().filter(|m| !m.removed).count()
    }

    /// Removes a marble: clears its cell, then clears the corresponding
    /// occupancy bit on every still-present neighbour (the opposite
    /// direction as seen from that neighbour) and refreshes that
    /// neighbour's availability flag. Bounded by the six neighbour links,
    /// never a grid rescan.
    pub fn remove(&mut self, id: MarbleId) {
        let (q, r) = (self.marbles[id].q, self.marbles[id].r);
        self.cells[q][r] = None;
        self.marbles[id].removed = true;
        for k in 0..self.marbles[id].neighbours.len() {
            let (dir, nid) = self.marbles[id].neighbours[k];
            let neighbour = &mut self.marbles[nid];
            if neighbour.removed {
                continue;
            }
            neighbour.neighbour_mask &= !(1 << ((dir + 3) % 6));
            neighbour.available = AVAILABLE_LOOKUP[neighbour.neighbour_mask as usize];
        }
    }

    /// Exact inverse of [`Board::remove`], used only to undo a tentative
    /// removal on search backtrack.
    ///
    /// Undo is strictly LIFO, so a re-added marble's own mask is still
    /// current: the board is back in the state it saw at removal time.
    pub fn add(&mut self, id: MarbleId) {
        let (q, r) = (self.marbles[id].q, self.marbles[id].r);
        self.cells[q][r] = Some(id);
        self.marbles[id].removed = false;
        for k in 0..self.marbles[id].neighbours.len() {
            let (dir, nid) = self.marbles[id].neighbours[k];
            let neighbour = &mut self.marbles[nid];
            if neighbour.removed {
                continue;
            }
            neighbour.neighbour_mask |= 1 << ((dir + 3) % 6);
            neighbour.available = AVAILABLE_LOOKUP[neighbour.neighbour_mask as usize];
        }
    }
}

impl fmt::Display for Board {
    /// Renders the grid sheared into a hex shape: rows are `r`, columns
    /// are `q`, each row shifted by half a cell. Out-of-window cells print
    /// as blanks, empty window cells as '.'.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            write!(f, "{:width$}", "", width = r)?;
            for q in 0..GRID_SIZE {
                let c = match self.cells[q][r] {
                    Some(id) => self.marbles[id].symbol.to_char(),
                    None if Board::in_window(q, r) => '.',
                    None => ' ',
                };
                write!(f, "{} ", c)?;
            }
            if r < GRID_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Marble multiset of a standard full board, 55 entries.
fn standard_composition() -> Vec<Element> {
    let mut marbles = Vec::with_capacity(55);
    marbles.extend(Element::METALS);
    for _ in 0..5 {
        marbles.push(Element::Mercury);
    }
    for _ in 0..4 {
        marbles.push(Element::Salt);
        marbles.push(Element::Life);
        marbles.push(Element::Death);
    }
    for element in Element::BASICS {
        for _ in 0..8 {
            marbles.push(element);
        }
    }
    marbles
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference predicate: three consecutive zero bits at some rotation.
    fn clearable_bruteforce(mask: usize) -> bool {
        (0..6).any(|i| {
            (mask >> i) & 1 == 0
                && (mask >> ((i + 1) % 6)) & 1 == 0
                && (mask >> ((i + 2) % 6)) & 1 == 0
        })
    }

    #[test]
    fn availability_table_matches_rotation_rule() {
        for mask in 0..64 {
            assert_eq!(
                AVAILABLE_LOOKUP[mask],
                clearable_bruteforce(mask),
                "mask {:06b}",
                mask
            );
        }
    }

    #[test]
    fn availability_table_extremes() {
        assert!(AVAILABLE_LOOKUP[0b000000]);
        assert!(AVAILABLE_LOOKUP[0b000001]);
        assert!(!AVAILABLE_LOOKUP[0b111111]);
        // alternating neighbours leave no 3-slot gap
        assert!(!AVAILABLE_LOOKUP[0b101010]);
        assert!(!AVAILABLE_LOOKUP[0b010101]);
        // one open wedge of exactly three slots
        assert!(AVAILABLE_LOOKUP[0b111000]);
        assert!(AVAILABLE_LOOKUP[0b000111]);
    }

    #[test]
    fn window_has_91_cells() {
        let mut count = 0;
        for q in 0..GRID_SIZE {
            for r in 0..GRID_SIZE {
                if Board::in_window(q, r) {
                    count += 1;
                }
            }
        }
        assert_eq!(count, 91);
        // parallelogram corners are cut off
        assert!(!Board::in_window(0, 0));
        assert!(!Board::in_window(10, 10));
        assert!(Board::in_window(0, 10));
        assert!(Board::in_window(10, 0));
        assert!(Board::in_window(CENTER, CENTER));
    }

    /// Center marble plus its full ring of six neighbours.
    fn center_with_ring() -> (Board, MarbleId, Vec<MarbleId>) {
        let mut entries = vec![(CENTER, CENTER, Element::Gold)];
        for &(dq, dr) in &DIRECTIONS {
            entries.push((
                (CENTER as i32 + dq) as usize,
                (CENTER as i32 + dr) as usize,
                Element::Fire,
            ));
        }
        let board = Board::from_entries(&entries).unwrap();
        (board, 0, (1..7).collect())
    }

    #[test]
    fn lone_marble_is_available() {
        let board = Board::from_entries(&[(CENTER, CENTER, Element::Salt)]).unwrap();
        assert_eq!(board.marble(0).neighbour_mask, 0);
        assert!(board.marble(0).is_available());
    }

    #[test]
    fn surrounded_marble_is_not_available() {
        let (board, center, ring) = center_with_ring();
        assert_eq!(board.marble(center).neighbour_mask, 0b111111);
        assert!(!board.marble(center).is_available());
        // ring marbles have three occupied neighbours but also a free wedge
        for id in ring {
            assert_eq!(board.marble(id).neighbour_mask.count_ones(), 3);
            assert!(board.marble(id).is_available());
        }
    }

    #[test]
    fn remove_updates_neighbour_masks_incrementally() {
        let (mut board, center, _) = center_with_ring();
        // open the wedge at directions 1..=3
        for dir in 1..=3u8 {
            let (dq, dr) = DIRECTIONS[dir as usize];
            let q = (CENTER as i32 + dq) as usize;
            let r = (CENTER as i32 + dr) as usize;
            let id = board.cells[q][r].unwrap();
            board.remove(id);
        }
        assert_eq!(board.marble(center).neighbour_mask, 0b110001);
        assert!(board.marble(center).is_available());
        assert_eq!(board.remaining(), 4);
    }

    #[test]
    fn add_is_exact_inverse_of_remove() {
        let (mut board, _, ring) = center_with_ring();
        let pristine = board.clone();

        let removed: Vec<MarbleId> = ring.iter().take(4).copied().collect();
        for &id in &removed {
            board.remove(id);
        }
        for &id in removed.iter().rev() {
            board.add(id);
        }

        for (a, b) in board.marbles().iter().zip(pristine.marbles()) {
            assert_eq!(a.removed, b.removed);
            assert_eq!(a.neighbour_mask, b.neighbour_mask);
            assert_eq!(a.available, b.available);
        }
        assert_eq!(board.cells, pristine.cells);
    }

    #[test]
    fn from_entries_rejects_out_of_window() {
        let result = Board::from_entries(&[(0, 0, Element::Fire)]);
        assert!(matches!(result, Err(Error::OutOfWindow { q: 0, r: 0 })));
    }

    #[test]
    fn from_entries_rejects_double_occupancy() {
        let result = Board::from_entries(&[
            (CENTER, CENTER, Element::Fire),
            (CENTER, CENTER, Element::Water),
        ]);
        assert!(matches!(result, Err(Error::CellOccupied { q: 5, r: 5 })));
    }

    #[test]
    fn element_char_round_trip() {
        for element in [
            Element::Fire,
            Element::Water,
            Element::Earth,
            Element::Air,
            Element::Lead,
            Element::Tin,
            Element::Iron,
            Element::Copper,
            Element::Silver,
            Element::Gold,
            Element::Mercury,
            Element::Life,
            Element::Death,
            Element::Salt,
            Element::Essence,
        ] {
            assert_eq!(Element::from_char(element.to_char()).unwrap(), element);
        }
        assert!(Element::from_char('Z').is_err());
    }

    #[test]
    fn detector_names_parse_with_and_without_suffix() {
        assert_eq!(Element::from_name("fire").unwrap(), Element::Fire);
        assert_eq!(Element::from_name("earth_a").unwrap(), Element::Earth);
        assert_eq!(Element::from_name("silver_a").unwrap(), Element::Silver);
        assert!(Element::from_name("brimstone").is_err());
    }

    #[test]
    fn random_board_is_deterministic_and_complete() {
        let board = Board::new_random_with_seed(7);
        assert_eq!(board.remaining(), 55);
        for (a, b) in board
            .marbles()
            .iter()
            .zip(Board::new_random_with_seed(7).marbles())
        {
            assert_eq!(a.symbol(), b.symbol());
            assert_eq!(a.coord(), b.coord());
        }
        let count = |e: Element| board.marbles().iter().filter(|m| m.symbol() == e).count();
        assert_eq!(count(Element::Gold), 1);
        assert_eq!(count(Element::Lead), 1);
        assert_eq!(count(Element::Mercury), 5);
        assert_eq!(count(Element::Salt), 4);
        assert_eq!(count(Element::Life), 4);
        assert_eq!(count(Element::Death), 4);
        assert_eq!(count(Element::Fire), 8);
        assert_eq!(count(Element::Essence), 0);

        assert_ne!(
            Board::new_random_with_seed(1)
                .marbles()
                .iter()
                .map(|m| m.coord())
                .collect::<Vec<_>>(),
            Board::new_random_with_seed(2)
                .marbles()
                .iter()
                .map(|m| m.coord())
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn display_renders_hex_window() {
        let board = Board::from_entries(&[(CENTER, CENTER, Element::Gold)]).unwrap();
        let rendered = format!("{}", board);
        assert_eq!(rendered.lines().count(), GRID_SIZE);
        assert!(rendered.contains('G'));
        // corner cells outside the window render as blanks, not dots
        let first = rendered.lines().next().unwrap();
        assert!(first.starts_with("          "));
    }
}
