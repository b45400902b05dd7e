//! Tests de sûreté : rien d'autre que les six opérations ne s'exécute.
//!
//! Deux angles :
//! - entrées "façon injection de code" : tout ce qui ressemble à un appel,
//!   un identifiant ou une instruction doit mourir en ErreurParse ;
//! - fuzz déterministe (seed fixe, budget temps) sur des expressions bien
//!   formées générées : jamais de panique, issues limitées à
//!   {valeur finie, division par zéro, résultat non fini}.

use std::time::{Duration, Instant};

use super::erreurs::{ErreurCalc, ErreurEval};
use super::eval::eval_expression;

/* ------------------------ Entrées hostiles ------------------------ */

#[test]
fn injections_rejetees_au_parse() {
    // Appels, identifiants, instructions, syntaxe de langage généraliste :
    // tout est refusé
    // dès la tokenisation ou l'analyse. Rien n'atteint l'évaluateur.
    let hostiles = [
        "__import__('os').system('ls')",
        "eval('1+1')",
        "exec(open('/etc/passwd'))",
        "sqrt(2)",
        "sin(0)",
        "x+1",
        "lambda: 1",
        "1; 2",
        "a.b",
        "[1,2]",
        "2**3",
        "1 if 2 else 3",
        "import os",
        "\"abc\"",
        "0x10",
        "1e3", // pas de notation scientifique dans la grammaire
    ];

    for s in hostiles {
        match eval_expression(s) {
            Err(ErreurCalc::Parse(_)) => {}
            autre => panic!("{s:?} aurait dû être ErreurParse, obtenu {autre:?}"),
        }
    }
}

#[test]
fn pas_de_multiplication_implicite_ni_appel() {
    // "2(3)" ressemble à un appel de fonction : refusé, pas interprété.
    assert!(matches!(
        eval_expression("2(3)"),
        Err(ErreurCalc::Parse(_))
    ));
    assert!(matches!(
        eval_expression("(1+1)(2)"),
        Err(ErreurCalc::Parse(_))
    ));
}

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d'expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let a = rng.pick(10);
    if rng.coin() {
        let b = rng.pick(100);
        format!("{a}.{b:02}")
    } else {
        format!("{a}")
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_nombre(rng);
    }

    match rng.pick(7) {
        0 => gen_nombre(rng),
        1 => format!(
            "({}+{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        2 => format!(
            "({}-{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        3 => format!(
            "({}*{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        4 => format!(
            "({}/{})",
            gen_expr(rng, depth - 1),
            gen_expr(rng, depth - 1)
        ),
        // exposant petit et constant : éviter les tours de puissance
        5 => format!("({}^{})", gen_expr(rng, depth - 1), 1 + rng.pick(3)),
        _ => format!("-{}", gen_expr(rng, depth - 1)),
    }
}

/* ------------------------ Helper somme balancée anti pile ------------------------ */

fn somme_balancee(terme: &str, n: usize) -> String {
    let mut items: Vec<String> = (0..n).map(|_| terme.to_string()).collect();
    while items.len() > 1 {
        let mut next = Vec::new();
        let mut i = 0;
        while i < items.len() {
            if i + 1 < items.len() {
                next.push(format!("({}+{})", items[i], items[i + 1]));
                i += 2;
            } else {
                next.push(items[i].clone());
                i += 1;
            }
        }
        items = next;
    }
    items.pop().unwrap_or_else(|| "0".to_string())
}

/* ------------------------ Tests fuzz ------------------------ */

#[test]
fn fuzz_determinisme_et_issues_fermees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    // Même seed => mêmes expressions => mêmes sorties (déterminisme)
    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..200 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 5);

        match eval_expression(&expr) {
            Ok(v) => {
                assert!(v.is_finite(), "valeur non finie acceptée: {expr:?} -> {v}");
                seen_ok += 1;
            }
            // Seules issues d'échec possibles sur une expression bien formée :
            Err(ErreurCalc::Eval(ErreurEval::DivisionParZero))
            | Err(ErreurCalc::Eval(ErreurEval::ResultatNonFini)) => {
                seen_err += 1;
            }
            Err(autre) => panic!("issue inattendue: expr={expr:?} err={autre}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne "balaye" rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune division par zéro vue: fuzz trop sage");
}

#[test]
fn fuzz_rejeu_identique() {
    // Rejouer la même seed doit produire exactement les mêmes issues.
    let tirage = |seed: u64| -> Vec<String> {
        let mut rng = Rng::new(seed);
        (0..40)
            .map(|_| {
                let e = gen_expr(&mut rng, 4);
                format!("{:?}", eval_expression(&e))
            })
            .collect()
    };

    assert_eq!(tirage(0xBADC0DE), tirage(0xBADC0DE));
}

#[test]
fn somme_balancee_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 800 demi-unités en arbre équilibré : profondeur ~10, loin du garde-fou.
    let expr = somme_balancee("0.5", 800);
    budget(t0, max);

    let v = eval_expression(&expr).unwrap_or_else(|e| panic!("err: {e}"));
    assert_eq!(v, 400.0);
}
