//! Cross-type integration tests: the whole catalog priced and rendered
//! polymorphically, plus composition scenarios.

use mobilia_core::{
    Armchair, Bed, BedSize, Chair, Desk, DiningSet, DrawerUnit, Furniture, Mechanism, Money,
    Sofa, SofaBed, SofaBedMode, Table, TableShape, Upholstery, Wardrobe,
};

fn full_catalog() -> Vec<Box<dyn Furniture>> {
    vec![
        Box::new(
            Chair::new("Silla Oficina", "Metal", "Negro", Money::from_units(120))
                .unwrap()
                .with_height_adjustable(true)
                .with_wheels(true),
        ),
        Box::new(
            Table::new("Mesa Comedor", "Roble", "Natural", Money::from_units(300))
                .unwrap()
                .with_capacity(6)
                .unwrap(),
        ),
        Box::new(
            Sofa::new("Sofá Moderno", "Tela", "Gris", Money::from_units(500))
                .unwrap()
                .with_modular(true),
        ),
        Box::new(
            Bed::new("Cama King", "Madera", "Blanco", Money::from_units(400))
                .unwrap()
                .with_size(BedSize::King)
                .with_mattress(true),
        ),
        Box::new(
            Wardrobe::new("Armario Triple", "Madera", "Café", Money::from_units(600))
                .unwrap()
                .with_doors(3),
        ),
        Box::new(
            Desk::new("Escritorio", "Madera", "Negro", Money::from_units(300))
                .unwrap()
                .with_drawers(2)
                .with_lighting(true),
        ),
        Box::new(
            DrawerUnit::new("Cajonera", "Plástico", "Blanco", Money::from_units(150)).unwrap(),
        ),
        Box::new(
            Armchair::new("Sillón Relax", "Cuero", "Negro", Money::from_units(600))
                .unwrap()
                .with_upholstery(Upholstery::Leather)
                .with_reclinable(true),
        ),
        Box::new(
            SofaBed::new("SofaCama", "Metal", "Azul", Money::from_units(700))
                .unwrap()
                .with_bed_size(BedSize::Queen)
                .with_mechanism(Mechanism::Hidraulico),
        ),
    ]
}

#[test]
fn every_item_prices_and_describes() {
    for item in full_catalog() {
        let price = item.compute_price();
        assert!(price > Money::zero(), "{} priced at zero", item.name());
        assert!(price >= item.base_price());

        let desc = item.describe();
        assert!(!desc.is_empty());
        assert!(desc.contains(item.name()));
        assert!(desc.contains(item.material()));
        assert!(desc.contains(item.color()));
    }
}

#[test]
fn catalog_total_covers_base_prices() {
    let catalog = full_catalog();
    let total: Money = catalog.iter().map(|item| item.compute_price()).sum();
    let bases: Money = catalog.iter().map(|item| item.base_price()).sum();

    assert!(total >= bases);
}

#[test]
fn base_fields_mutate_through_the_trait() {
    let mut catalog = full_catalog();
    for item in catalog.iter_mut() {
        item.base_mut().set_color("Verde").unwrap();
        assert_eq!(item.color(), "Verde");

        assert!(item.base_mut().set_base_price(Money::from_cents(-1)).is_err());
    }
}

#[test]
fn living_room_scenario() {
    let sofa = Sofa::new("Sofá Sala", "Tela", "Beige", Money::from_units(600))
        .unwrap()
        .with_upholstery(Upholstery::Fabric);
    let coffee_table = Table::new("Mesa Centro", "Vidrio", "Transparente", Money::from_units(150))
        .unwrap()
        .with_shape(TableShape::Redonda);

    assert_eq!(sofa.seating().capacity(), 3);
    assert_eq!(coffee_table.shape(), TableShape::Redonda);

    let room_total = sofa.compute_price() + coffee_table.compute_price();
    assert!(room_total > Money::from_units(750));
}

#[test]
fn bedroom_scenario() {
    let bed = Bed::new("Cama Queen", "Roble", "Natural", Money::from_units(500))
        .unwrap()
        .with_size(BedSize::Queen)
        .with_mattress(true);
    let wardrobe = Wardrobe::new("Armario", "Roble", "Natural", Money::from_units(700))
        .unwrap()
        .with_mirrors(true);

    // bed 500+400+300, wardrobe 700+100+100
    assert_eq!(
        bed.compute_price() + wardrobe.compute_price(),
        Money::from_units(2100)
    );
}

#[test]
fn dining_set_end_to_end() {
    let table = Table::new("Mesa Familiar", "Pino", "Natural", Money::from_units(350))
        .unwrap()
        .with_capacity(8)
        .unwrap();
    let chairs: Vec<Chair> = (0..6)
        .map(|i| {
            Chair::new(&format!("Silla {}", i + 1), "Pino", "Natural", Money::from_units(90))
                .unwrap()
                .with_upholstery(Upholstery::Fabric)
        })
        .collect();

    let mut set = DiningSet::new("Comedor Familiar", table, chairs).unwrap();

    assert_eq!(set.table().capacity(), 8);
    assert_eq!(set.chair_count(), 6);
    assert!(set.chairs().iter().all(|c| c.material() == "Pino"));

    // Six chairs qualify for the bulk discount.
    let undiscounted = set.table().compute_price()
        + set
            .chairs()
            .iter()
            .map(|c| c.compute_price())
            .sum::<Money>();
    assert!(set.total_price() < undiscounted);

    let summary = set.summary();
    assert_eq!(summary.total_item_count, 7);
    assert_eq!(summary.seating_capacity, 6);
    assert_eq!(summary.materials_used, vec!["Pino"]);

    // Adding then removing a chair restores the original total.
    let before = set.total_price();
    set.add_chair(Chair::new("Extra", "Pino", "Natural", Money::from_units(90)).unwrap());
    set.remove_chair(None);
    assert_eq!(set.total_price(), before);
}

#[test]
fn sofa_bed_dual_contract() {
    let mut sofa_bed = SofaBed::new("SofaCama Versátil", "Metal", "Azul", Money::from_units(700))
        .unwrap()
        .with_bed_size(BedSize::Queen)
        .with_mechanism(Mechanism::Hidraulico);

    // Seating contract
    assert_eq!(sofa_bed.seating().capacity(), 3);
    assert!(sofa_bed.seating().has_backrest());

    // Sleeping contract
    assert_eq!(sofa_bed.bed_size(), BedSize::Queen);
    assert!(sofa_bed.includes_mattress());

    // Mode toggling
    assert_eq!(sofa_bed.mode(), SofaBedMode::Sofa);
    sofa_bed.transform();
    assert_eq!(sofa_bed.mode(), SofaBedMode::Cama);

    // The price reflects both capabilities plus the mechanism
    assert!(sofa_bed.compute_price() > Money::from_units(700));
}
