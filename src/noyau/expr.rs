// src/noyau/expr.rs
//
// AST arithmétique — enum FERMÉ.
// ------------------------------
// C'est la frontière de sûreté côté structure : le parseur ne peut construire
// que ces trois formes, et l'évaluateur ne répartit que sur elles. Aucun nœud
// "appel", "identifiant" ou "accès attribut" n'existe, donc aucune entrée ne
// peut déclencher autre chose que les six opérations de la liste blanche.
//
// Contrat (invariant) :
// - arbre fini, une seule racine, propriété exclusive des enfants (Box) ;
// - profondeur bornée par la longueur de l'entrée (et par le garde-fou du
//   parseur) ;
// - construit à chaque évaluation, consommé, puis jeté — aucun état persistant.

/// Opérateur binaire admis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBin {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

/// Opérateur unaire admis. Un seul : la négation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpUn {
    Neg,
}

/// Nœud d'expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Feuille numérique.
    Nombre(f64),

    /// Opération binaire ; chaque côté possède exclusivement son sous-arbre.
    Binaire {
        op: OpBin,
        gauche: Box<Expr>,
        droite: Box<Expr>,
    },

    /// Opération unaire (négation).
    Unaire { op: OpUn, operande: Box<Expr> },
}

impl Expr {
    /// Constructeur raccourci pour les nœuds binaires.
    pub fn binaire(op: OpBin, gauche: Expr, droite: Expr) -> Self {
        Expr::Binaire {
            op,
            gauche: Box::new(gauche),
            droite: Box::new(droite),
        }
    }

    /// Constructeur raccourci pour la négation.
    pub fn neg(operande: Expr) -> Self {
        Expr::Unaire {
            op: OpUn::Neg,
            operande: Box::new(operande),
        }
    }
}
